//! Roster Server - employee record management service
//!
//! HTTP service exposing CRUD over a single employee table:
//!
//! - **HTTP API** (`api`): RESTful handlers under `/api/Employees`
//! - **Database** (`db`): SQLite connection pool and employee repository
//! - **Core** (`core`): configuration, shared state, server startup
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer
//! ├── middleware/    # request logging
//! └── utils/         # logger setup
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use shared::{AppError, AppResult};
