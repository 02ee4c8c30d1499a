mod common;

use asset_compass_api::error::{ApiError, LOCATION_IN_USE};
use asset_compass_api::models::LocationUpdate;
use asset_compass_api::services::{asset_service, location_service};

use common::{add_asset, add_employee, add_location, test_state};

#[tokio::test]
async fn test_empty_location_can_be_deleted() {
    let state = test_state().await;
    let location = add_location(&state, "Branch Office").await;

    location_service::delete_location(&state, location.id)
        .await
        .unwrap();

    let remaining = location_service::list_locations(&state).await.unwrap();
    assert!(remaining.is_empty());
    let again = location_service::delete_location(&state, location.id).await;
    assert!(matches!(again, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_location_with_assets_is_not_deleted() {
    let state = test_state().await;
    let location = add_location(&state, "Head Office").await;
    add_asset(&state, "Developer Laptop", "Head Office").await;

    match location_service::delete_location(&state, location.id).await {
        Err(ApiError::Conflict(message)) => assert_eq!(message, LOCATION_IN_USE),
        other => panic!("expected a conflict, got {:?}", other.map(|_| ())),
    }

    let detail = location_service::get_location(&state, location.id)
        .await
        .unwrap();
    assert_eq!(detail.view.assets_count, 1);
}

#[tokio::test]
async fn test_location_with_employees_is_not_deleted() {
    let state = test_state().await;
    let location = add_location(&state, "Head Office").await;
    add_employee(&state, "Priya Sharma", "head office").await;

    let result = location_service::delete_location(&state, location.id).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_warehouse_collects_central_warehouse_records() {
    let state = test_state().await;
    let warehouse = add_location(&state, "Warehouse").await;
    add_asset(&state, "Spare Laptop", "Central Warehouse").await;
    add_asset(&state, "Spare Monitor", "Central Warehouse").await;
    add_employee(&state, "Sam Okafor", "Central Warehouse").await;

    let detail = location_service::get_location(&state, warehouse.id)
        .await
        .unwrap();
    assert_eq!(detail.view.assets_count, 2);
    assert_eq!(detail.assets.len(), 2);
    assert_eq!(detail.view.employees_count, 1);

    let listed = location_service::list_locations(&state).await.unwrap();
    assert_eq!(listed[0].assets_count, 2);

    let result = location_service::delete_location(&state, warehouse.id).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_rename_propagates_to_linked_records() {
    let state = test_state().await;
    let location = add_location(&state, "Head Office").await;
    let asset = add_asset(&state, "Developer Laptop", "Head Office").await;

    location_service::update_location(
        &state,
        location.id,
        LocationUpdate {
            name: Some("HQ".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let asset = asset_service::get_asset(&state, asset.id).await.unwrap();
    assert_eq!(asset.location, "HQ");
    assert_eq!(asset.location_id, Some(location.id));
}

#[tokio::test]
async fn test_backfill_links_records_created_before_their_location() {
    let state = test_state().await;
    // No location exists yet, so the asset is stored by name only
    let asset = add_asset(&state, "Developer Laptop", "Head Office").await;
    assert!(asset.location_id.is_none());
    add_asset(&state, "Lost Tablet", "Atlantis").await;

    let location = add_location(&state, "Head Office").await;
    let report = location_service::backfill_location_ids(&state)
        .await
        .unwrap();
    assert_eq!(report.scanned, 2);
    assert_eq!(report.fixed, 1);
    assert_eq!(report.unresolved.len(), 1);

    let asset = asset_service::get_asset(&state, asset.id).await.unwrap();
    assert_eq!(asset.location_id, Some(location.id));
}
