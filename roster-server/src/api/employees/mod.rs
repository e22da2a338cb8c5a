//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
///
/// The base path is `/api/Employees` (capital E): existing consoles call
/// it with this casing, so it stays as-is.
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/Employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
