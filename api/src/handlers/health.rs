// Health check endpoint handler implementation

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::AppState;
use crate::services::health::{HealthChecker, HealthReport};

/// Handler for GET /health - Reports whether the API and its database are reachable
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = HealthChecker::new(&state.db).check().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
