// Handler for CSV report downloads

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::domain::reports::ReportKind;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::report_service;

/// Handler for GET /reports/{kind} - Downloads the report as a CSV attachment
pub async fn download_report(
    State(state): State<AppState>,
    Path(kind): Path<ReportKind>,
) -> ApiResult<impl IntoResponse> {
    let report = report_service::generate_report(&state, kind).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.file_name),
            ),
        ],
        report.content,
    ))
}
