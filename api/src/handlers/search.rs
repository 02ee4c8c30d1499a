use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{SearchQuery, SearchResponse};
use crate::services::search_service;

/// Handler for GET /search?q= - Matches across assets, employees and locations
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    Ok(Json(search_service::search(&state, &query.q).await?))
}
