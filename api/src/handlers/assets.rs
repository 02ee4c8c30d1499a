// Handlers for asset endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::entity::{assets, assignments};
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{
    AssetListQuery, AssetUpdate, AssignRequest, AssignmentOutcome, BulkImportRequest,
    BulkImportResponse, NewAsset, ReturnRequest,
};
use crate::services::asset_service;

/// Handler for GET /assets - Lists assets, optionally filtered by status, category, location or search term
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetListQuery>,
) -> ApiResult<Json<Vec<assets::Model>>> {
    Ok(Json(asset_service::list_assets(&state, query).await?))
}

/// Handler for GET /assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<assets::Model>> {
    Ok(Json(asset_service::get_asset(&state, id).await?))
}

/// Handler for POST /assets
pub async fn create_asset(
    State(state): State<AppState>,
    Json(request): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<assets::Model>)> {
    let asset = asset_service::create_asset(&state, request).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Handler for PUT /assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssetUpdate>,
) -> ApiResult<Json<assets::Model>> {
    Ok(Json(asset_service::update_asset(&state, id, request).await?))
}

/// Handler for DELETE /assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    asset_service::delete_asset(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /assets/bulk - Imports JSON rows or CSV text
pub async fn bulk_import(
    State(state): State<AppState>,
    Json(request): Json<BulkImportRequest>,
) -> ApiResult<Json<BulkImportResponse>> {
    Ok(Json(asset_service::bulk_import(&state, request).await?))
}

/// Handler for POST /assets/{id}/assign
pub async fn assign_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignRequest>,
) -> ApiResult<Json<AssignmentOutcome>> {
    Ok(Json(asset_service::assign_asset(&state, id, request).await?))
}

/// Handler for POST /assets/{id}/return
pub async fn return_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<ReturnRequest>>,
) -> ApiResult<Json<AssignmentOutcome>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    Ok(Json(asset_service::return_asset(&state, id, request).await?))
}

/// Handler for GET /assets/{id}/assignments - Assignment history of one asset
pub async fn asset_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<assignments::Model>>> {
    Ok(Json(asset_service::asset_history(&state, id).await?))
}
