// Asset lifecycle: CRUD, custody changes and bulk import

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::Set;
use uuid::Uuid;

use super::location_service::{resolve_location, ResolvedLocation};
use super::{all_assets, all_locations, settings_service};
use crate::cache::Mutation;
use crate::db::repositories::{AssetFilter, ReturnTarget};
use crate::domain::{csv, membership, tags};
use crate::entity::{assets, assignments};
use crate::entity::sea_orm_active_enums::{AssetCondition, AssetStatus};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    AssetListQuery, AssetUpdate, AssignRequest, AssignmentOutcome, BulkAssetRow,
    BulkImportRequest, BulkImportResponse, NewAsset, ReturnRequest, SkippedRow,
};

pub async fn list_assets(state: &AppState, query: AssetListQuery) -> ApiResult<Vec<assets::Model>> {
    let filter = AssetFilter {
        status: query.status,
        category: query.category.filter(|c| !c.trim().is_empty()),
        location_id: query.location_id,
        search: query.search.filter(|s| !s.trim().is_empty()),
    };

    if filter.status.is_none()
        && filter.category.is_none()
        && filter.location_id.is_none()
        && filter.search.is_none()
    {
        return Ok(all_assets(state).await?.as_ref().clone());
    }
    Ok(state.repositories.assets.find_filtered(&filter).await?)
}

pub async fn get_asset(state: &AppState, id: Uuid) -> ApiResult<assets::Model> {
    state
        .repositories
        .assets
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Asset {} not found", id)))
}

/// Assignment history of one asset, most recent first
pub async fn asset_history(state: &AppState, id: Uuid) -> ApiResult<Vec<assignments::Model>> {
    get_asset(state, id).await?;
    Ok(state.repositories.assignments.find_by_asset(id).await?)
}

pub async fn create_asset(state: &AppState, request: NewAsset) -> ApiResult<assets::Model> {
    request.validate()?;

    let location = resolve_location(state, request.location_id, request.location.as_deref())
        .await?
        .ok_or_else(|| ApiError::InvalidRequest("location is required".to_string()))?;

    let asset_tag = match request.asset_tag.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => next_tags(state, 1).await?.pop().unwrap_or_default(),
    };

    let now = Utc::now();
    let asset = state
        .repositories
        .assets
        .insert(assets::ActiveModel {
            id: Set(Uuid::new_v4()),
            asset_tag: Set(asset_tag),
            serial_number: Set(request.serial_number.trim().to_string()),
            name: Set(request.name.trim().to_string()),
            brand: Set(request.brand.trim().to_string()),
            model: Set(request.model.trim().to_string()),
            category: Set(request.category.trim().to_string()),
            status: Set(request.status.unwrap_or(AssetStatus::Available)),
            condition: Set(request.condition.unwrap_or(AssetCondition::Good)),
            location: Set(location.name),
            location_id: Set(location.id),
            assigned_to: Set(None),
            assigned_to_id: Set(None),
            purchase_date: Set(request.purchase_date),
            purchase_cost: Set(request.purchase_cost),
            vendor: Set(request.vendor),
            warranty_start: Set(request.warranty_start),
            warranty_end: Set(request.warranty_end),
            notes: Set(request.notes),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .await?;

    state.cache.invalidate(Mutation::AssetWrite);
    tracing::info!("Created asset {} ({})", asset.asset_tag, asset.id);
    Ok(asset)
}

/// General edit. Moving into or out of `assigned` only happens through
/// assign and return so the assignment history stays consistent.
pub async fn update_asset(
    state: &AppState,
    id: Uuid,
    request: AssetUpdate,
) -> ApiResult<assets::Model> {
    let current = get_asset(state, id).await?;
    request.validate(&current)?;

    if let Some(status) = request.status {
        if status != current.status
            && (status == AssetStatus::Assigned || current.status == AssetStatus::Assigned)
        {
            return Err(ApiError::Conflict(format!(
                "Status cannot change from {} to {} here; use assign or return",
                current.status.as_str(),
                status.as_str()
            )));
        }
    }

    let location = if request.location_id.is_some() || request.location.is_some() {
        resolve_location(state, request.location_id, request.location.as_deref()).await?
    } else {
        None
    };

    let mut model: assets::ActiveModel = current.into();
    if let Some(v) = request.serial_number {
        model.serial_number = Set(v.trim().to_string());
    }
    if let Some(v) = request.name {
        model.name = Set(v.trim().to_string());
    }
    if let Some(v) = request.brand {
        model.brand = Set(v.trim().to_string());
    }
    if let Some(v) = request.model {
        model.model = Set(v.trim().to_string());
    }
    if let Some(v) = request.category {
        model.category = Set(v.trim().to_string());
    }
    if let Some(v) = request.status {
        model.status = Set(v);
    }
    if let Some(v) = request.condition {
        model.condition = Set(v);
    }
    if let Some(ResolvedLocation { name, id: location_id }) = location {
        model.location = Set(name);
        model.location_id = Set(location_id);
    }
    if request.purchase_date.is_some() {
        model.purchase_date = Set(request.purchase_date);
    }
    if request.purchase_cost.is_some() {
        model.purchase_cost = Set(request.purchase_cost);
    }
    if request.vendor.is_some() {
        model.vendor = Set(request.vendor);
    }
    if request.warranty_start.is_some() {
        model.warranty_start = Set(request.warranty_start);
    }
    if request.warranty_end.is_some() {
        model.warranty_end = Set(request.warranty_end);
    }
    if request.notes.is_some() {
        model.notes = Set(request.notes);
    }
    model.updated_at = Set(Utc::now());

    let asset = state.repositories.assets.update(model).await?;
    state.cache.invalidate(Mutation::AssetWrite);
    tracing::info!("Updated asset {} ({})", asset.asset_tag, asset.id);
    Ok(asset)
}

pub async fn delete_asset(state: &AppState, id: Uuid) -> ApiResult<()> {
    if !state.repositories.assets.delete(id).await? {
        return Err(ApiError::NotFound(format!("Asset {} not found", id)));
    }
    state.cache.invalidate(Mutation::AssetWrite);
    tracing::info!("Deleted asset {}", id);
    Ok(())
}

/// Hand an asset to an employee
pub async fn assign_asset(
    state: &AppState,
    id: Uuid,
    request: AssignRequest,
) -> ApiResult<AssignmentOutcome> {
    let asset = get_asset(state, id).await?;
    match asset.status {
        AssetStatus::Assigned => {
            return Err(ApiError::Conflict(format!(
                "Asset {} is already assigned to {}",
                asset.asset_tag,
                asset.assigned_to.as_deref().unwrap_or("someone")
            )));
        }
        AssetStatus::Lost | AssetStatus::Retired => {
            return Err(ApiError::Conflict(format!(
                "Asset {} is {} and cannot be assigned",
                asset.asset_tag,
                asset.status.as_str()
            )));
        }
        AssetStatus::Available | AssetStatus::Repair => {}
    }

    let employee = state
        .repositories
        .employees
        .find_by_id(request.employee_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Employee {} not found", request.employee_id))
        })?;

    let (asset, assignment) = state
        .repositories
        .assignments
        .assign(&asset, &employee, request.notes)
        .await?;

    state.cache.invalidate(Mutation::AssetAssign);
    tracing::info!(
        "Assigned asset {} to {} ({})",
        asset.asset_tag,
        employee.name,
        employee.id
    );
    Ok(AssignmentOutcome { asset, assignment })
}

/// Take an asset back, optionally moving it
pub async fn return_asset(
    state: &AppState,
    id: Uuid,
    request: ReturnRequest,
) -> ApiResult<AssignmentOutcome> {
    let asset = get_asset(state, id).await?;
    let location =
        resolve_location(state, request.location_id, request.location_name.as_deref()).await?;

    let target = ReturnTarget {
        location_id: location.as_ref().and_then(|l| l.id),
        location_name: location.map(|l| l.name),
        condition: request.condition,
    };
    let (asset, assignment) = state
        .repositories
        .assignments
        .return_asset(asset.id, &target)
        .await?;

    state.cache.invalidate(Mutation::AssetReturn);
    tracing::info!("Returned asset {} to {}", asset.asset_tag, asset.location);
    Ok(AssignmentOutcome { asset, assignment })
}

/// Import many assets at once from JSON rows or CSV text
pub async fn bulk_import(
    state: &AppState,
    request: BulkImportRequest,
) -> ApiResult<BulkImportResponse> {
    let mut skipped = Vec::new();
    let rows: Vec<(usize, BulkAssetRow)> = match (request.assets, request.csv) {
        (Some(rows), _) => rows.into_iter().enumerate().map(|(i, r)| (i + 1, r)).collect(),
        (None, Some(text)) => rows_from_csv(&text, &mut skipped)?,
        (None, None) => {
            return Err(ApiError::InvalidRequest(
                "Provide either assets or csv".to_string(),
            ));
        }
    };

    let mut valid = Vec::with_capacity(rows.len());
    for (row_number, row) in rows {
        match row.missing_field() {
            Some(field) => skipped.push(SkippedRow {
                row: row_number,
                reason: format!("{} is required", field),
            }),
            None => valid.push((row_number, row)),
        }
    }
    if valid.is_empty() {
        return Ok(BulkImportResponse {
            imported: Vec::new(),
            skipped,
        });
    }

    let locations = all_locations(state).await?;
    let tags = next_tags(state, valid.len()).await?;
    let today = Utc::now().date_naive();
    let mut imported = Vec::with_capacity(valid.len());

    for ((row_number, row), tag) in valid.into_iter().zip(tags) {
        let status = match AssetStatus::parse(&row.status) {
            Some(AssetStatus::Assigned) | None => AssetStatus::Available,
            Some(status) => status,
        };
        let notes = if row.assigned_to.is_empty() {
            "Added via bulk import".to_string()
        } else {
            format!("Added via bulk import. Requested assignee: {}", row.assigned_to)
        };
        let now = Utc::now();

        let result = state
            .repositories
            .assets
            .insert(assets::ActiveModel {
                id: Set(Uuid::new_v4()),
                asset_tag: Set(tag),
                serial_number: Set(row.serial_number),
                name: Set(row.name),
                brand: Set("Unknown".to_string()),
                model: Set("Unknown".to_string()),
                category: Set(row.category),
                status: Set(status),
                condition: Set(AssetCondition::Good),
                location_id: Set(membership::resolve_by_name(&row.location, &locations).map(|l| l.id)),
                location: Set(row.location),
                assigned_to: Set(None),
                assigned_to_id: Set(None),
                purchase_date: Set(Some(today)),
                purchase_cost: Set(Some(Decimal::ZERO)),
                vendor: Set(Some("Bulk Import".to_string())),
                warranty_start: Set(None),
                warranty_end: Set(None),
                notes: Set(Some(notes)),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .await;

        match result {
            Ok(asset) => imported.push(asset),
            Err(e) => {
                tracing::warn!("Bulk import row {} rejected: {}", row_number, e);
                skipped.push(SkippedRow {
                    row: row_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    skipped.sort_by_key(|s| s.row);
    state.cache.invalidate(Mutation::BulkImport);
    tracing::info!(
        "Bulk import: {} imported, {} skipped",
        imported.len(),
        skipped.len()
    );
    Ok(BulkImportResponse { imported, skipped })
}

/// Split CSV text into numbered rows; a leading header row is dropped
fn rows_from_csv(
    text: &str,
    skipped: &mut Vec<SkippedRow>,
) -> ApiResult<Vec<(usize, BulkAssetRow)>> {
    let mut records = csv::parse(text)?;
    if records
        .first()
        .and_then(|r| r.first())
        .is_some_and(|first| first.eq_ignore_ascii_case("name"))
    {
        records.remove(0);
    }

    let mut rows = Vec::with_capacity(records.len());
    for (i, columns) in records.iter().enumerate() {
        match BulkAssetRow::from_columns(columns) {
            Some(row) => rows.push((i + 1, row)),
            None => skipped.push(SkippedRow {
                row: i + 1,
                reason: format!("Expected at least 5 columns, found {}", columns.len()),
            }),
        }
    }
    Ok(rows)
}

async fn next_tags(state: &AppState, count: usize) -> ApiResult<Vec<String>> {
    let prefix = settings_service::get_settings(state).await?.tag_prefix;
    let existing = state.repositories.assets.tags_with_prefix(&prefix).await?;
    Ok(tags::next_asset_tags(&prefix, &existing, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows_drop_header_and_short_rows() {
        let text = "name,category,serialNumber,status,location,assignedTo\n\
                    \"Dell, XPS\",Laptop,SN1,available,HQ\n\
                    Broken,Row\n\
                    Pixel,Phone,SN2,assigned,Warehouse,Priya\n";
        let mut skipped = Vec::new();
        let rows = rows_from_csv(text, &mut skipped).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1.name, "Dell, XPS");
        assert_eq!(rows[1].0, 3);
        assert_eq!(rows[1].1.assigned_to, "Priya");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].row, 2);
    }
}
