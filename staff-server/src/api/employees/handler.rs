//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::{CreatedResponse, Employee, EmployeeCreate, EmployeeUpdate, MessageResponse};

use crate::core::ServerState;
use crate::repository::{EmployeeRepository, RepoError};
use crate::utils::validation::require_fields;
use crate::utils::{AppError, AppResult};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.store.clone());
    let employees = repo
        .find_all()
        .await
        .map_err(|e| AppError::operation("Error fetching employees", e))?;
    Ok(Json(employees))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(payload) = payload?;
    require_fields(&payload.required_fields())?;

    let repo = EmployeeRepository::new(state.store.clone());
    let id = repo.create(payload).await.map_err(|e| match e {
        RepoError::Duplicate(detail) => {
            tracing::info!(reason = %detail, "Rejected duplicate employee");
            AppError::conflict("Employee ID already exists")
        }
        RepoError::Store(e) => AppError::operation("Error adding employee", e),
    })?;

    tracing::info!(id = %id, "Employee created");
    Ok(Json(CreatedResponse {
        message: "Employee added successfully".to_string(),
        id,
    }))
}

/// Update an employee (all mutable fields; employeeId is fixed)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    require_fields(&payload.required_fields())?;

    let repo = EmployeeRepository::new(state.store.clone());
    repo.update(&id, payload)
        .await
        .map_err(|e| AppError::operation("Error updating employee", e))?;

    tracing::info!(id = %id, "Employee updated");
    Ok(Json(MessageResponse::new("Employee updated successfully")))
}

/// Delete an employee (physical, no existence check)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = EmployeeRepository::new(state.store.clone());
    repo.delete(&id)
        .await
        .map_err(|e| AppError::operation("Error deleting employee", e))?;

    tracing::info!(id = %id, "Employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}
