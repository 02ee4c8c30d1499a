mod common;

use asset_compass_api::entity::sea_orm_active_enums::{AssetCondition, AssetStatus, EmployeeStatus};
use asset_compass_api::error::ApiError;
use asset_compass_api::models::{AssetListQuery, AssetUpdate, AssignRequest, OffboardRequest, ReturnRequest};
use asset_compass_api::services::{asset_service, dashboard_service, employee_service};
use uuid::Uuid;

use common::{add_asset, add_employee, add_location, test_state};

#[tokio::test]
async fn test_assign_then_return_keeps_one_open_assignment() {
    let state = test_state().await;
    let office = add_location(&state, "Head Office").await;
    let employee = add_employee(&state, "Priya Sharma", "Head Office").await;
    let asset = add_asset(&state, "Developer Laptop", "Head Office").await;

    assert_eq!(asset.status, AssetStatus::Available);
    assert_eq!(asset.location_id, Some(office.id), "name should resolve to the location id");
    assert!(asset.asset_tag.starts_with("AST-"), "generated tag: {}", asset.asset_tag);

    let outcome = asset_service::assign_asset(
        &state,
        asset.id,
        AssignRequest {
            employee_id: employee.id,
            notes: Some("New starter kit".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome.asset.status, AssetStatus::Assigned);
    assert_eq!(outcome.asset.assigned_to_id, Some(employee.id));
    assert_eq!(outcome.asset.assigned_to.as_deref(), Some("Priya Sharma"));
    assert!(outcome.assignment.return_date.is_none());

    // The cached list must reflect the assignment
    let listed = asset_service::list_assets(&state, AssetListQuery::default())
        .await
        .unwrap();
    assert_eq!(listed[0].status, AssetStatus::Assigned);

    // A second assign is refused while the first is open
    let again = asset_service::assign_asset(
        &state,
        asset.id,
        AssignRequest {
            employee_id: employee.id,
            notes: None,
        },
    )
    .await;
    assert!(matches!(again, Err(ApiError::Conflict(_))));

    let returned = asset_service::return_asset(
        &state,
        asset.id,
        ReturnRequest {
            condition: Some(AssetCondition::Fair),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(returned.asset.status, AssetStatus::Available);
    assert!(returned.asset.assigned_to_id.is_none());
    assert!(returned.asset.assigned_to.is_none());
    assert_eq!(returned.asset.condition, AssetCondition::Fair);
    assert_eq!(returned.assignment.id, outcome.assignment.id);
    assert!(returned.assignment.return_date.is_some());

    let history = asset_service::asset_history(&state, asset.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history.iter().all(|a| a.return_date.is_some()));

    let stats = dashboard_service::get_stats(&state).await.unwrap();
    assert_eq!(stats.total_assets, 1);
    assert_eq!(stats.available, 1);
    assert_eq!(stats.assigned, 0);
}

#[tokio::test]
async fn test_return_without_open_assignment_conflicts() {
    let state = test_state().await;
    add_location(&state, "Head Office").await;
    let asset = add_asset(&state, "Spare Monitor", "Head Office").await;

    let result = asset_service::return_asset(&state, asset.id, ReturnRequest::default()).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_assign_to_unknown_employee_is_not_found() {
    let state = test_state().await;
    add_location(&state, "Head Office").await;
    let asset = add_asset(&state, "Developer Laptop", "Head Office").await;

    let result = asset_service::assign_asset(
        &state,
        asset.id,
        AssignRequest {
            employee_id: Uuid::new_v4(),
            notes: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    // Nothing changed
    let asset = asset_service::get_asset(&state, asset.id).await.unwrap();
    assert_eq!(asset.status, AssetStatus::Available);
}

#[tokio::test]
async fn test_retired_asset_cannot_be_assigned() {
    let state = test_state().await;
    add_location(&state, "Head Office").await;
    let employee = add_employee(&state, "Priya Sharma", "Head Office").await;
    let asset = add_asset(&state, "Old Laptop", "Head Office").await;

    asset_service::update_asset(
        &state,
        asset.id,
        AssetUpdate {
            status: Some(AssetStatus::Retired),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let result = asset_service::assign_asset(
        &state,
        asset.id,
        AssignRequest {
            employee_id: employee.id,
            notes: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_status_cannot_be_set_to_assigned_directly() {
    let state = test_state().await;
    add_location(&state, "Head Office").await;
    let asset = add_asset(&state, "Developer Laptop", "Head Office").await;

    let result = asset_service::update_asset(
        &state,
        asset.id,
        AssetUpdate {
            status: Some(AssetStatus::Assigned),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_employee_holding_assets_cannot_be_deleted_but_can_be_offboarded() {
    let state = test_state().await;
    let office = add_location(&state, "Head Office").await;
    let employee = add_employee(&state, "Priya Sharma", "Head Office").await;
    let laptop = add_asset(&state, "Developer Laptop", "Head Office").await;
    let phone = add_asset(&state, "Work Phone", "Head Office").await;

    for asset in [&laptop, &phone] {
        asset_service::assign_asset(
            &state,
            asset.id,
            AssignRequest {
                employee_id: employee.id,
                notes: None,
            },
        )
        .await
        .unwrap();
    }

    let deleted = employee_service::delete_employee(&state, employee.id).await;
    assert!(matches!(deleted, Err(ApiError::Conflict(_))));

    let offboarded = employee_service::offboard_employee(
        &state,
        employee.id,
        OffboardRequest {
            location_id: Some(office.id),
        },
    )
    .await
    .unwrap();
    assert_eq!(offboarded.employee.status, EmployeeStatus::Terminated);
    assert_eq!(offboarded.returned_assets.len(), 2);
    assert!(offboarded
        .returned_assets
        .iter()
        .all(|a| a.status == AssetStatus::Available && a.assigned_to_id.is_none()));

    let detail = employee_service::get_employee(&state, employee.id).await.unwrap();
    assert!(detail.assets.is_empty());

    // Nothing held anymore, so the delete goes through
    employee_service::delete_employee(&state, employee.id).await.unwrap();
}

#[tokio::test]
async fn test_email_assets_without_api_key_is_mock() {
    let state = test_state().await;
    add_location(&state, "Head Office").await;
    let employee = add_employee(&state, "Priya Sharma", "Head Office").await;

    let response = employee_service::email_assets(&state, employee.id).await.unwrap();
    assert!(response.mock);
    assert_eq!(response.asset_count, 0);
}
