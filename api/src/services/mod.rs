// Business logic service implementations

pub mod alert_service;
pub mod asset_service;
pub mod assignment_service;
pub mod dashboard_service;
pub mod employee_service;
pub mod handover_service;
pub mod health;
pub mod location_service;
pub mod report_service;
pub mod search_service;
pub mod settings_service;

use std::sync::Arc;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::entity::{alerts, assets, assignments, employees, locations};

// Cached full collections shared by the derived views

pub(crate) async fn all_assets(state: &AppState) -> ApiResult<Arc<Vec<assets::Model>>> {
    let repo = state.repositories.assets.clone();
    Ok(state.cache.assets(|| async move { repo.find_all().await }).await?)
}

pub(crate) async fn all_employees(state: &AppState) -> ApiResult<Arc<Vec<employees::Model>>> {
    let repo = state.repositories.employees.clone();
    Ok(state.cache.employees(|| async move { repo.find_all().await }).await?)
}

pub(crate) async fn all_locations(state: &AppState) -> ApiResult<Arc<Vec<locations::Model>>> {
    let repo = state.repositories.locations.clone();
    Ok(state.cache.locations(|| async move { repo.find_all().await }).await?)
}

pub(crate) async fn all_assignments(
    state: &AppState,
) -> ApiResult<Arc<Vec<assignments::Model>>> {
    let repo = state.repositories.assignments.clone();
    Ok(state.cache.assignments(|| async move { repo.find_all().await }).await?)
}

pub(crate) async fn unresolved_alerts(state: &AppState) -> ApiResult<Arc<Vec<alerts::Model>>> {
    let repo = state.repositories.alerts.clone();
    Ok(state.cache.alerts(|| async move { repo.find_unresolved().await }).await?)
}
