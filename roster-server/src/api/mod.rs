//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`employees`] - employee CRUD endpoints

pub mod employees;
pub mod health;

use std::time::Duration;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::core::{Config, ServerState};
use crate::middleware::logging_middleware;

/// Assemble the full application router
///
/// CORS is wide open: the console is a browser page served from a
/// different origin than the API.
pub fn router(state: ServerState, config: &Config) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .merge(employees::router())
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_millis(
            config.request_timeout_ms,
        )))
        .with_state(state)
}
