// Handlers for alert endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::entity::alerts;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{AlertUpdate, NewAlert};
use crate::services::alert_service;

/// Handler for GET /alerts - Unresolved alerts, newest first
pub async fn list_alerts(State(state): State<AppState>) -> ApiResult<Json<Vec<alerts::Model>>> {
    Ok(Json(alert_service::list_alerts(&state).await?))
}

pub async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<NewAlert>,
) -> ApiResult<(StatusCode, Json<alerts::Model>)> {
    let alert = alert_service::create_alert(&state, request).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

pub async fn update_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AlertUpdate>,
) -> ApiResult<Json<alerts::Model>> {
    Ok(Json(alert_service::update_alert(&state, id, request).await?))
}

pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    alert_service::resolve_alert(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    alert_service::delete_alert(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
