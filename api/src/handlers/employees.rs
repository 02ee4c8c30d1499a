// Handlers for employee endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::entity::employees;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{
    EmailAssetsResponse, EmployeeDetail, EmployeeUpdate, NewEmployee, OffboardRequest,
    OffboardResponse,
};
use crate::services::employee_service;

pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<employees::Model>>> {
    Ok(Json(employee_service::list_employees(&state).await?))
}

/// Handler for GET /employees/{id} - Employee with the assets they hold
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EmployeeDetail>> {
    Ok(Json(employee_service::get_employee(&state, id).await?))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<NewEmployee>,
) -> ApiResult<(StatusCode, Json<employees::Model>)> {
    let employee = employee_service::create_employee(&state, request).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EmployeeUpdate>,
) -> ApiResult<Json<employees::Model>> {
    Ok(Json(employee_service::update_employee(&state, id, request).await?))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    employee_service::delete_employee(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /employees/{id}/offboard - Returns held assets and terminates the employee
pub async fn offboard_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<OffboardRequest>>,
) -> ApiResult<Json<OffboardResponse>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    Ok(Json(employee_service::offboard_employee(&state, id, request).await?))
}

/// Handler for POST /employees/{id}/email-assets - Emails the employee their asset list
pub async fn email_assets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EmailAssetsResponse>> {
    Ok(Json(employee_service::email_assets(&state, id).await?))
}
