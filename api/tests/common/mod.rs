// Shared setup for the integration tests: an in-memory SQLite database
// with the full schema and an application context on top of it

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use asset_compass_api::config::ApiConfig;
use asset_compass_api::email::Mailer;
use asset_compass_api::entity::sea_orm_active_enums::LocationType;
use asset_compass_api::entity::{alerts, app_settings, assets, assignments, employees, locations};
use asset_compass_api::handlers::{AppContext, AppState};
use asset_compass_api::models::{NewAsset, NewEmployee, NewLocation};
use asset_compass_api::services::{asset_service, employee_service, location_service};

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) {
    let backend = conn.get_database_backend();
    let statement = backend.build(&Schema::new(backend).create_table_from_entity(entity));
    conn.execute(statement)
        .await
        .expect("Failed to create table");
}

/// Fresh application state backed by an empty in-memory database
pub async fn test_state() -> AppState {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    // Parents before children so the foreign keys resolve
    create_table(&conn, locations::Entity).await;
    create_table(&conn, employees::Entity).await;
    create_table(&conn, assets::Entity).await;
    create_table(&conn, assignments::Entity).await;
    create_table(&conn, alerts::Entity).await;
    create_table(&conn, app_settings::Entity).await;

    let config = ApiConfig::for_database("sqlite::memory:");
    let mailer = Mailer::new(&config).expect("Failed to build mailer");
    Arc::new(AppContext::new(conn, config, mailer))
}

pub async fn add_location(state: &AppState, name: &str) -> locations::Model {
    let request = NewLocation {
        name: name.to_string(),
        location_type: LocationType::Office,
        address: None,
    };
    location_service::create_location(state, request)
        .await
        .expect("Failed to create location")
        .location
}

pub async fn add_employee(state: &AppState, name: &str, location: &str) -> employees::Model {
    let request = NewEmployee {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        department: "Engineering".to_string(),
        position: "Developer".to_string(),
        location: Some(location.to_string()),
        ..Default::default()
    };
    employee_service::create_employee(state, request)
        .await
        .expect("Failed to create employee")
}

pub async fn add_asset(state: &AppState, name: &str, location: &str) -> assets::Model {
    let request = NewAsset {
        serial_number: format!("SN-{}", name.len()),
        name: name.to_string(),
        brand: "Dell".to_string(),
        model: "Latitude 7440".to_string(),
        category: "laptop".to_string(),
        location: Some(location.to_string()),
        ..Default::default()
    };
    asset_service::create_asset(state, request)
        .await
        .expect("Failed to create asset")
}
