// Handlers for dashboard endpoints

use axum::{extract::State, Json};

use crate::domain::dashboard::StatusCounts;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::DashboardResponse;
use crate::services::dashboard_service;

/// Handler for GET /dashboard - Stats, categories, recent activity, alerts and per-location counts
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    Ok(Json(dashboard_service::get_dashboard(&state).await?))
}

/// Handler for GET /dashboard/stats - Asset counts by status
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatusCounts>> {
    Ok(Json(dashboard_service::get_stats(&state).await?))
}
