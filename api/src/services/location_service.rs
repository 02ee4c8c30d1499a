// Location CRUD, derived counts and the location-id backfill

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use super::{all_assets, all_employees, all_locations};
use crate::cache::Mutation;
use crate::db::DbError;
use crate::domain::membership;
use crate::entity::locations;
use crate::error::{ApiError, ApiResult, LOCATION_IN_USE};
use crate::handlers::AppState;
use crate::models::{BackfillReport, LocationDetail, LocationUpdate, LocationView, NewLocation};

/// A location reference as stored on assets and employees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub name: String,
    pub id: Option<Uuid>,
}

/// Turn a client-supplied location reference into the stored pair.
///
/// An explicit id must exist and supplies the display name. A bare name is
/// kept as given and linked to the location it resolves to, if any.
pub async fn resolve_location(
    state: &AppState,
    id: Option<Uuid>,
    name: Option<&str>,
) -> ApiResult<Option<ResolvedLocation>> {
    if let Some(id) = id {
        let location = state
            .repositories
            .locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Location {} not found", id)))?;
        return Ok(Some(ResolvedLocation {
            name: location.name,
            id: Some(location.id),
        }));
    }

    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };
    let locations = all_locations(state).await?;
    Ok(Some(ResolvedLocation {
        name: name.to_string(),
        id: membership::resolve_by_name(name, &locations).map(|l| l.id),
    }))
}

/// All locations with their derived asset and employee counts
pub async fn list_locations(state: &AppState) -> ApiResult<Vec<LocationView>> {
    let locations = all_locations(state).await?;
    let assets = all_assets(state).await?;
    let employees = all_employees(state).await?;

    Ok(locations
        .iter()
        .map(|location| LocationView {
            location: location.clone(),
            assets_count: membership::count_members(location, &assets),
            employees_count: membership::count_members(location, &employees),
        })
        .collect())
}

pub async fn get_location(state: &AppState, id: Uuid) -> ApiResult<LocationDetail> {
    let location = find_location(state, id).await?;
    let assets = all_assets(state).await?;
    let employees = all_employees(state).await?;

    let member_assets: Vec<_> = membership::members_of(&location, &assets)
        .into_iter()
        .cloned()
        .collect();
    let member_employees: Vec<_> = membership::members_of(&location, &employees)
        .into_iter()
        .cloned()
        .collect();

    Ok(LocationDetail {
        view: LocationView {
            location,
            assets_count: member_assets.len(),
            employees_count: member_employees.len(),
        },
        assets: member_assets,
        employees: member_employees,
    })
}

pub async fn create_location(state: &AppState, request: NewLocation) -> ApiResult<LocationView> {
    request.validate()?;

    let location = state
        .repositories
        .locations
        .insert(locations::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name.trim().to_string()),
            location_type: Set(request.location_type),
            address: Set(request.address),
            created_at: Set(Utc::now()),
        })
        .await?;
    state.cache.invalidate(Mutation::LocationWrite);
    tracing::info!("Created location {} ({})", location.name, location.id);

    // Legacy records may already carry this name
    let assets = all_assets(state).await?;
    let employees = all_employees(state).await?;
    Ok(LocationView {
        assets_count: membership::count_members(&location, &assets),
        employees_count: membership::count_members(&location, &employees),
        location,
    })
}

pub async fn update_location(
    state: &AppState,
    id: Uuid,
    request: LocationUpdate,
) -> ApiResult<locations::Model> {
    request.validate()?;
    let current = find_location(state, id).await?;

    let renamed = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| *name != current.name)
        .map(str::to_string);

    let mut model: locations::ActiveModel = current.into();
    if let Some(name) = &renamed {
        model.name = Set(name.clone());
    }
    if let Some(location_type) = request.location_type {
        model.location_type = Set(location_type);
    }
    if let Some(address) = request.address {
        model.address = Set(Some(address));
    }
    let location = state.repositories.locations.update(model).await?;

    if let Some(name) = &renamed {
        let assets = state.repositories.assets.rename_location(id, name).await?;
        let employees = state.repositories.employees.rename_location(id, name).await?;
        tracing::info!(
            "Location {} renamed to {}; updated {} assets and {} employees",
            id,
            name,
            assets,
            employees
        );
    }

    state.cache.invalidate(Mutation::LocationWrite);
    Ok(location)
}

/// Delete a location that nothing belongs to anymore
pub async fn delete_location(state: &AppState, id: Uuid) -> ApiResult<()> {
    let location = find_location(state, id).await?;
    let assets = all_assets(state).await?;
    let employees = all_employees(state).await?;

    let linked_assets = membership::count_members(&location, &assets);
    let linked_employees = membership::count_members(&location, &employees);
    if linked_assets > 0 || linked_employees > 0 {
        tracing::warn!(
            "Refusing to delete location {}: {} assets and {} employees linked",
            id,
            linked_assets,
            linked_employees
        );
        return Err(ApiError::Conflict(LOCATION_IN_USE.to_string()));
    }

    match state.repositories.locations.delete(id).await {
        Ok(true) => {}
        Ok(false) => return Err(ApiError::NotFound(format!("Location {} not found", id))),
        Err(DbError::ConstraintViolation(msg)) => {
            tracing::warn!("Location {} still referenced: {}", id, msg);
            return Err(ApiError::Conflict(LOCATION_IN_USE.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    state.cache.invalidate(Mutation::LocationWrite);
    tracing::info!("Deleted location {} ({})", location.name, id);
    Ok(())
}

/// Link assets and employees whose location id is missing or dangling to
/// the location their name resolves to
pub async fn backfill_location_ids(state: &AppState) -> ApiResult<BackfillReport> {
    let locations = state.repositories.locations.find_all().await?;
    let assets = state.repositories.assets.find_all().await?;
    let employees = state.repositories.employees.find_all().await?;
    let mut report = BackfillReport::default();

    for asset in assets.iter().filter(|a| membership::needs_backfill(*a, &locations)) {
        report.scanned += 1;
        match membership::resolve_by_name(&asset.location, &locations) {
            Some(location) => {
                state
                    .repositories
                    .assets
                    .set_location_id(asset.id, location.id)
                    .await?;
                report.fixed += 1;
            }
            None => report.unresolved.push(asset.asset_tag.clone()),
        }
    }

    for employee in employees
        .iter()
        .filter(|e| membership::needs_backfill(*e, &locations))
    {
        report.scanned += 1;
        match membership::resolve_by_name(&employee.location, &locations) {
            Some(location) => {
                state
                    .repositories
                    .employees
                    .set_location_id(employee.id, location.id)
                    .await?;
                report.fixed += 1;
            }
            None => report.unresolved.push(employee.email.clone()),
        }
    }

    state.cache.invalidate(Mutation::LocationBackfill);
    tracing::info!(
        "Location backfill: scanned {}, fixed {}, unresolved {}",
        report.scanned,
        report.fixed,
        report.unresolved.len()
    );
    Ok(report)
}

async fn find_location(state: &AppState, id: Uuid) -> ApiResult<locations::Model> {
    state
        .repositories
        .locations
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Location {} not found", id)))
}
