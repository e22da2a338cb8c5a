//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::employee;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::{AppError, AppResult};

/// GET /api/Employees - list all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/Employees/{id} - get a single employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let emp = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(id))?;
    Ok(Json(emp))
}

/// Missing or malformed required fields are a 400, not axum's default 422.
fn reject(rejection: JsonRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}

/// POST /api/Employees - create an employee
///
/// Returns 201 with the created record, including the assigned id.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let Json(payload) = payload.map_err(reject)?;
    payload.validate()?;
    let emp = employee::create(&state.pool, payload).await?;
    tracing::info!(id = emp.id, "Employee created");
    Ok((StatusCode::CREATED, Json(emp)))
}

/// PUT /api/Employees/{id} - replace the four editable fields
///
/// Returns the updated record so the console's optimistic merge can be
/// checked against server truth.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let Json(payload) = payload.map_err(reject)?;
    payload.validate()?;
    let emp = employee::update(&state.pool, id, payload).await?;
    tracing::info!(id, "Employee updated");
    Ok(Json(emp))
}

/// DELETE /api/Employees/{id} - remove an employee permanently
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    employee::delete(&state.pool, id).await?;
    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
