// Handlers for assignment history endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::entity::assignments;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::assignment_service;

pub async fn list_assignments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<assignments::Model>>> {
    Ok(Json(assignment_service::list_assignments(&state).await?))
}

pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    assignment_service::delete_assignment(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
