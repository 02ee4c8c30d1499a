// Dashboard figures derived from the cached collections

use super::{all_assets, all_assignments, all_locations, unresolved_alerts};
use crate::domain::dashboard::{self, StatusCounts};
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::DashboardResponse;

const RECENT_LIMIT: usize = 5;

pub async fn get_stats(state: &AppState) -> ApiResult<StatusCounts> {
    let assets = all_assets(state).await?;
    Ok(StatusCounts::from_assets(&assets))
}

pub async fn get_dashboard(state: &AppState) -> ApiResult<DashboardResponse> {
    let assets = all_assets(state).await?;
    let assignments = all_assignments(state).await?;
    let locations = all_locations(state).await?;
    let alerts = unresolved_alerts(state).await?;

    // Collections come back newest first
    Ok(DashboardResponse {
        stats: StatusCounts::from_assets(&assets),
        categories: dashboard::category_breakdown(&assets),
        recent_assets: assets.iter().take(RECENT_LIMIT).cloned().collect(),
        recent_assignments: assignments.iter().take(RECENT_LIMIT).cloned().collect(),
        alerts: alerts.as_ref().clone(),
        locations: dashboard::location_breakdown(&locations, &assets),
    })
}
