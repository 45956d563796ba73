//! Employee endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidEmployeeId};
use crate::models::Employee;
use crate::state::AppState;

/// GET /employee - list every employee
async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employees().list_employees().await?;
    Ok(Json(employees))
}

/// POST /employee - create an employee, ignoring any client id
async fn create_employee(
    State(state): State<AppState>,
    JsonBody(employee): JsonBody<Employee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let created = state.employees().insert_employee(&employee).await?;
    tracing::debug!(id = %created.id, "Employee created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employee/{id} - overwrite name, age and salary
///
/// Echoes the request fields with the path id, as written in the path,
/// rather than re-reading the stored record.
async fn update_employee(
    State(state): State<AppState>,
    ValidEmployeeId(id, raw_id): ValidEmployeeId,
    JsonBody(mut employee): JsonBody<Employee>,
) -> Result<Json<Employee>, ApiError> {
    state.employees().update_employee(id, &employee).await?;

    employee.id = raw_id;
    Ok(Json(employee))
}

/// DELETE /employee/{id} - hard delete
async fn delete_employee(
    State(state): State<AppState>,
    ValidEmployeeId(id, _): ValidEmployeeId,
) -> Result<Json<&'static str>, ApiError> {
    let deleted = state.employees().delete_employee(id).await?;

    if deleted < 1 {
        return Err(ApiError::NotFound("not found".into()));
    }

    tracing::debug!(%id, "Employee deleted");
    Ok(Json("record deleted"))
}

/// Employee routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employee", get(list_employees).post(create_employee))
        .route("/employee/{id}", put(update_employee).delete(delete_employee))
}
