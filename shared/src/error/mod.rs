//! Unified error system
//!
//! - [`ErrorCode`]: standardized error codes shared across server and client
//! - [`AppError`]: rich error type with code, message, and details
//! - [`ApiResponse`]: envelope for error bodies
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::validation("Salary must be a non-negative number")
//!     .with_detail("field", "salary");
//! assert_eq!(err.http_status().as_u16(), 400);
//!
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, ErrorCode::ValidationFailed.code());
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
