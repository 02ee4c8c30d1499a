// Employee CRUD, offboarding and the asset-summary email

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use super::location_service::{resolve_location, ResolvedLocation};
use super::{all_employees, settings_service};
use crate::cache::Mutation;
use crate::db::repositories::ReturnTarget;
use crate::db::DbError;
use crate::domain::render;
use crate::email::EmailOutcome;
use crate::entity::{assets, employees};
use crate::entity::sea_orm_active_enums::{AssetStatus, EmployeeStatus};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    EmailAssetsResponse, EmployeeDetail, EmployeeUpdate, NewEmployee, OffboardRequest,
    OffboardResponse,
};

pub async fn list_employees(state: &AppState) -> ApiResult<Vec<employees::Model>> {
    Ok(all_employees(state).await?.as_ref().clone())
}

pub async fn get_employee(state: &AppState, id: Uuid) -> ApiResult<EmployeeDetail> {
    let employee = find_employee(state, id).await?;
    let assets = state.repositories.assets.find_assigned_to(id).await?;
    Ok(EmployeeDetail { employee, assets })
}

pub async fn create_employee(
    state: &AppState,
    request: NewEmployee,
) -> ApiResult<employees::Model> {
    request.validate()?;
    let location = resolve_location(state, request.location_id, request.location.as_deref())
        .await?
        .ok_or_else(|| ApiError::InvalidRequest("location is required".to_string()))?;

    let employee = state
        .repositories
        .employees
        .insert(employees::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name.trim().to_string()),
            email: Set(request.email.trim().to_lowercase()),
            department: Set(request.department.trim().to_string()),
            position: Set(request.position.trim().to_string()),
            location: Set(location.name),
            location_id: Set(location.id),
            avatar_url: Set(request.avatar_url),
            status: Set(request.status.unwrap_or(EmployeeStatus::Active)),
            join_date: Set(request.join_date),
            created_at: Set(Utc::now()),
        })
        .await?;

    state.cache.invalidate(Mutation::EmployeeWrite);
    tracing::info!("Created employee {} ({})", employee.name, employee.id);
    Ok(employee)
}

pub async fn update_employee(
    state: &AppState,
    id: Uuid,
    request: EmployeeUpdate,
) -> ApiResult<employees::Model> {
    request.validate()?;
    let current = find_employee(state, id).await?;

    let location = if request.location_id.is_some() || request.location.is_some() {
        resolve_location(state, request.location_id, request.location.as_deref()).await?
    } else {
        None
    };

    let mut model: employees::ActiveModel = current.into();
    if let Some(v) = request.name {
        model.name = Set(v.trim().to_string());
    }
    if let Some(v) = request.email {
        model.email = Set(v.trim().to_lowercase());
    }
    if let Some(v) = request.department {
        model.department = Set(v.trim().to_string());
    }
    if let Some(v) = request.position {
        model.position = Set(v.trim().to_string());
    }
    if let Some(ResolvedLocation { name, id: location_id }) = location {
        model.location = Set(name);
        model.location_id = Set(location_id);
    }
    if request.avatar_url.is_some() {
        model.avatar_url = Set(request.avatar_url);
    }
    if let Some(v) = request.status {
        model.status = Set(v);
    }
    if request.join_date.is_some() {
        model.join_date = Set(request.join_date);
    }

    let employee = state.repositories.employees.update(model).await?;
    state.cache.invalidate(Mutation::EmployeeWrite);
    tracing::info!("Updated employee {} ({})", employee.name, employee.id);
    Ok(employee)
}

/// Remove an employee who holds no assets
pub async fn delete_employee(state: &AppState, id: Uuid) -> ApiResult<()> {
    let held = state.repositories.assets.find_assigned_to(id).await?;
    if !held.is_empty() {
        return Err(ApiError::Conflict(format!(
            "Employee still holds {} assigned asset(s); return them first",
            held.len()
        )));
    }

    if !state.repositories.employees.delete(id).await? {
        return Err(ApiError::NotFound(format!("Employee {} not found", id)));
    }
    state.cache.invalidate(Mutation::EmployeeWrite);
    tracing::info!("Deleted employee {}", id);
    Ok(())
}

/// Return everything the employee holds and mark them terminated
pub async fn offboard_employee(
    state: &AppState,
    id: Uuid,
    request: OffboardRequest,
) -> ApiResult<OffboardResponse> {
    let employee = find_employee(state, id).await?;
    let location = resolve_location(state, request.location_id, None).await?;
    let target = ReturnTarget {
        location_id: location.as_ref().and_then(|l| l.id),
        location_name: location.map(|l| l.name),
        condition: None,
    };

    let held = state.repositories.assets.find_assigned_to(id).await?;
    let mut returned_assets = Vec::with_capacity(held.len());
    for asset in held {
        match state
            .repositories
            .assignments
            .return_asset(asset.id, &target)
            .await
        {
            Ok((asset, _)) => returned_assets.push(asset),
            Err(DbError::StaleWrite(msg)) => {
                // Assigned without an assignment record; release it directly
                tracing::warn!("Releasing asset {} without history: {}", asset.asset_tag, msg);
                let mut model: assets::ActiveModel = asset.into();
                model.status = Set(AssetStatus::Available);
                model.assigned_to = Set(None);
                model.assigned_to_id = Set(None);
                if let Some(location_id) = target.location_id {
                    model.location_id = Set(Some(location_id));
                }
                if let Some(name) = &target.location_name {
                    model.location = Set(name.clone());
                }
                model.updated_at = Set(Utc::now());
                returned_assets.push(state.repositories.assets.update(model).await?);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let mut model: employees::ActiveModel = employee.into();
    model.status = Set(EmployeeStatus::Terminated);
    let employee = state.repositories.employees.update(model).await?;

    state.cache.invalidate(Mutation::EmployeeOffboard);
    tracing::info!(
        "Offboarded employee {} ({}); {} assets returned",
        employee.name,
        employee.id,
        returned_assets.len()
    );
    Ok(OffboardResponse {
        employee,
        returned_assets,
    })
}

/// Email the employee the list of assets they currently hold
pub async fn email_assets(state: &AppState, id: Uuid) -> ApiResult<EmailAssetsResponse> {
    let employee = find_employee(state, id).await?;
    if employee.email.trim().is_empty() {
        return Err(ApiError::InvalidRequest(format!(
            "Employee {} has no email address",
            employee.name
        )));
    }

    let assets = state.repositories.assets.find_assigned_to(id).await?;
    let settings = settings_service::get_settings(state).await?;
    let html = render::asset_summary_email(&employee, &assets, &settings.org_name);
    let email = state.mailer.compose(
        &employee.email,
        &format!("Your Assigned Company Assets - {}", settings.org_name),
        html,
    );

    let outcome = state.mailer.send(&email).await?;
    let mock = outcome == EmailOutcome::Logged;
    Ok(EmailAssetsResponse {
        message: if mock {
            format!("Email logged for {} (delivery not configured)", employee.email)
        } else {
            format!("Email sent to {}", employee.email)
        },
        mock,
        asset_count: assets.len(),
    })
}

async fn find_employee(state: &AppState, id: Uuid) -> ApiResult<employees::Model> {
    state
        .repositories
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))
}
