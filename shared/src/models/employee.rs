//! Employee Model

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Employee entity
///
/// The `id` is assigned by the server on create and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: f64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: f64,
}

/// Update employee payload
///
/// A PUT replaces all four editable fields, so the shape matches
/// [`EmployeeCreate`] rather than carrying per-field `Option`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: f64,
}

impl EmployeeCreate {
    /// Validate required fields before persisting
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(&self.name, &self.email, self.salary)
    }
}

impl EmployeeUpdate {
    /// Validate required fields before persisting
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(&self.name, &self.email, self.salary)
    }
}

/// Server-side validation: required fields must be non-blank and the
/// salary non-negative. Email format is the client's concern.
fn validate_fields(name: &str, email: &str, salary: f64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    if email.trim().is_empty() {
        return Err(AppError::required_field("email"));
    }
    if !salary.is_finite() || salary < 0.0 {
        return Err(
            AppError::with_message(ErrorCode::ValueOutOfRange, "Salary must be a non-negative number")
                .with_detail("field", "salary"),
        );
    }
    Ok(())
}
