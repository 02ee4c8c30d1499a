use serde::Serialize;

use crate::domain::dashboard::{CategoryCount, LocationCount, StatusCounts};
use crate::entity::{alerts, assets, assignments};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: StatusCounts,
    pub categories: Vec<CategoryCount>,
    pub recent_assets: Vec<assets::Model>,
    pub recent_assignments: Vec<assignments::Model>,
    pub alerts: Vec<alerts::Model>,
    pub locations: Vec<LocationCount>,
}

/// Result of the location-id backfill
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillReport {
    pub scanned: usize,
    pub fixed: usize,
    /// Asset tags and employee emails whose location name matched nothing
    pub unresolved: Vec<String>,
}
