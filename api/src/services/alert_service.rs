// Alerts

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use super::unresolved_alerts;
use crate::cache::Mutation;
use crate::entity::alerts;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{AlertUpdate, NewAlert};

pub async fn list_alerts(state: &AppState) -> ApiResult<Vec<alerts::Model>> {
    Ok(unresolved_alerts(state).await?.as_ref().clone())
}

pub async fn create_alert(state: &AppState, request: NewAlert) -> ApiResult<alerts::Model> {
    request.validate()?;
    let now = Utc::now();
    let alert = state
        .repositories
        .alerts
        .insert(alerts::ActiveModel {
            id: Set(Uuid::new_v4()),
            alert_type: Set(request.alert_type),
            title: Set(request.title.trim().to_string()),
            description: Set(request.description),
            asset_id: Set(request.asset_id),
            severity: Set(request.severity),
            is_resolved: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .await?;

    state.cache.invalidate(Mutation::AlertWrite);
    tracing::info!("Created alert {} ({})", alert.title, alert.id);
    Ok(alert)
}

pub async fn update_alert(
    state: &AppState,
    id: Uuid,
    request: AlertUpdate,
) -> ApiResult<alerts::Model> {
    request.validate()?;
    let current = state
        .repositories
        .alerts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Alert {} not found", id)))?;

    let mut model: alerts::ActiveModel = current.into();
    if let Some(v) = request.alert_type {
        model.alert_type = Set(v);
    }
    if let Some(v) = request.title {
        model.title = Set(v.trim().to_string());
    }
    if let Some(v) = request.description {
        model.description = Set(v);
    }
    if request.asset_id.is_some() {
        model.asset_id = Set(request.asset_id);
    }
    if let Some(v) = request.severity {
        model.severity = Set(v);
    }
    if let Some(v) = request.is_resolved {
        model.is_resolved = Set(v);
    }
    model.updated_at = Set(Utc::now());

    let alert = state.repositories.alerts.update(model).await?;
    state.cache.invalidate(Mutation::AlertWrite);
    Ok(alert)
}

pub async fn resolve_alert(state: &AppState, id: Uuid) -> ApiResult<()> {
    if !state.repositories.alerts.resolve(id).await? {
        return Err(ApiError::NotFound(format!("Alert {} not found", id)));
    }
    state.cache.invalidate(Mutation::AlertWrite);
    tracing::info!("Resolved alert {}", id);
    Ok(())
}

pub async fn delete_alert(state: &AppState, id: Uuid) -> ApiResult<()> {
    if !state.repositories.alerts.delete(id).await? {
        return Err(ApiError::NotFound(format!("Alert {} not found", id)));
    }
    state.cache.invalidate(Mutation::AlertWrite);
    Ok(())
}
