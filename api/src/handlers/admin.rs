// Maintenance endpoints

use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::BackfillReport;
use crate::services::location_service;

/// Handler for POST /admin/backfill-location-ids - Links records to locations by name
pub async fn backfill_location_ids(
    State(state): State<AppState>,
) -> ApiResult<Json<BackfillReport>> {
    Ok(Json(location_service::backfill_location_ids(&state).await?))
}
