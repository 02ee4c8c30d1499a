// Handlers for location endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::entity::locations;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{LocationDetail, LocationUpdate, LocationView, NewLocation};
use crate::services::location_service;

/// Handler for GET /locations - Locations with derived asset and employee counts
pub async fn list_locations(State(state): State<AppState>) -> ApiResult<Json<Vec<LocationView>>> {
    Ok(Json(location_service::list_locations(&state).await?))
}

/// Handler for GET /locations/{id} - Location with its member assets and employees
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<LocationDetail>> {
    Ok(Json(location_service::get_location(&state, id).await?))
}

pub async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<NewLocation>,
) -> ApiResult<(StatusCode, Json<LocationView>)> {
    let location = location_service::create_location(&state, request).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<LocationUpdate>,
) -> ApiResult<Json<locations::Model>> {
    Ok(Json(location_service::update_location(&state, id, request).await?))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    location_service::delete_location(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
