// Handlers for the handover form

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use uuid::Uuid;

use crate::domain::handover::{HandoverDocument, HandoverKind};
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::handover_service;

/// Handler for GET /handover/{kind}/{id}
pub async fn get_handover(
    State(state): State<AppState>,
    Path((kind, id)): Path<(HandoverKind, Uuid)>,
) -> ApiResult<Json<HandoverDocument>> {
    Ok(Json(handover_service::handover_document(&state, kind, id).await?))
}

/// Handler for GET /handover/{kind}/{id}/print - Printable HTML form
pub async fn print_handover(
    State(state): State<AppState>,
    Path((kind, id)): Path<(HandoverKind, Uuid)>,
) -> ApiResult<Html<String>> {
    Ok(Html(handover_service::handover_html(&state, kind, id).await?))
}
