//! Shared types for the roster system
//!
//! Data model and unified error handling used by both `roster-server`
//! and `roster-client`:
//!
//! - [`models`]: the Employee entity and its create/update payloads
//! - [`error`]: error codes, [`AppError`] and the API response envelope

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeCreate, EmployeeUpdate};
