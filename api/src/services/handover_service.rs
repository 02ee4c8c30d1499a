// Handover form for an employee or a location

use chrono::Utc;
use uuid::Uuid;

use super::{all_assets, settings_service};
use crate::domain::handover::{self, HandoverDocument, HandoverKind};
use crate::domain::render;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

pub async fn handover_document(
    state: &AppState,
    kind: HandoverKind,
    id: Uuid,
) -> ApiResult<HandoverDocument> {
    let today = Utc::now().date_naive();
    let assets = all_assets(state).await?;

    match kind {
        HandoverKind::Employee => {
            let employee = state
                .repositories
                .employees
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))?;
            Ok(handover::for_employee(&employee, &assets, today))
        }
        HandoverKind::Location => {
            let location = state
                .repositories
                .locations
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Location {} not found", id)))?;
            Ok(handover::for_location(&location, &assets, today))
        }
    }
}

/// Printable HTML rendering of the handover form
pub async fn handover_html(state: &AppState, kind: HandoverKind, id: Uuid) -> ApiResult<String> {
    let document = handover_document(state, kind, id).await?;
    let settings = settings_service::get_settings(state).await?;
    Ok(render::handover_form(&document, &settings.org_name))
}
