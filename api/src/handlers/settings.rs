use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::AppConfigDocument;
use crate::services::settings_service;

pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<AppConfigDocument>> {
    Ok(Json(settings_service::get_settings(&state).await?))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(document): Json<AppConfigDocument>,
) -> ApiResult<Json<AppConfigDocument>> {
    Ok(Json(settings_service::update_settings(&state, document).await?))
}
