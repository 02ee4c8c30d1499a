// CSV report generation

use chrono::Utc;

use super::{all_assets, all_assignments, all_employees, all_locations};
use crate::domain::csv;
use crate::domain::reports::{self, ReportKind};
use crate::error::ApiResult;
use crate::handlers::AppState;

/// A finished CSV download
#[derive(Debug)]
pub struct ReportFile {
    pub file_name: String,
    pub content: String,
}

pub async fn generate_report(state: &AppState, kind: ReportKind) -> ApiResult<ReportFile> {
    let today = Utc::now().date_naive();
    let assets = all_assets(state).await?;

    let content = match kind {
        ReportKind::Inventory => csv::export(&reports::inventory(&assets))?,
        ReportKind::Assignments => {
            let assignments = all_assignments(state).await?;
            csv::export(&reports::assignments(&assignments))?
        }
        ReportKind::Aging => csv::export(&reports::aging(&assets, today))?,
        ReportKind::Warranty => csv::export(&reports::warranty(&assets, today))?,
        ReportKind::Locations => {
            let locations = all_locations(state).await?;
            let employees = all_employees(state).await?;
            csv::export(&reports::location_summary(&locations, &assets, &employees))?
        }
        ReportKind::Utilization => {
            let assignments = all_assignments(state).await?;
            csv::export(&reports::utilization(&assets, &assignments, today))?
        }
    };

    tracing::info!("Generated {:?} report", kind);
    Ok(ReportFile {
        file_name: csv::export_file_name(kind.file_base(), today),
        content,
    })
}
