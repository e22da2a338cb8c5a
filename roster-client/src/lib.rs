//! Roster Client - employee console for the roster server
//!
//! Provides network-based HTTP calls to the roster server API and the
//! console state container that a front-end drives:
//!
//! - [`HttpClient`]: typed CRUD calls over reqwest
//! - [`Console`]: client-side state machine (loading, ready, editing)

pub mod config;
pub mod console;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use console::{Console, EmployeeForm, View, phone_display};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
