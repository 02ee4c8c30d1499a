// Asset Compass API library: routing, state and everything behind it

pub mod cache;
pub mod config;
pub mod db;
pub mod domain;
pub mod email;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::time::Duration;

use axum::routing::{delete, get, post, put, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{
    admin, alerts, assets, assignments, dashboard, employees, handover, health, locations,
    reports, search, settings, AppState,
};

/// Build the HTTP router with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .expose_headers([
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::CONTENT_DISPOSITION,
        ])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health::health_check))
        // Assets
        .route("/assets", get(assets::list_assets).post(assets::create_asset))
        .route("/assets/bulk", post(assets::bulk_import))
        .route(
            "/assets/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/assets/{id}/assign", post(assets::assign_asset))
        .route("/assets/{id}/return", post(assets::return_asset))
        .route("/assets/{id}/assignments", get(assets::asset_history))
        // Employees
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route("/employees/{id}/offboard", post(employees::offboard_employee))
        .route("/employees/{id}/email-assets", post(employees::email_assets))
        // Locations
        .route(
            "/locations",
            get(locations::list_locations).post(locations::create_location),
        )
        .route(
            "/locations/{id}",
            get(locations::get_location)
                .put(locations::update_location)
                .delete(locations::delete_location),
        )
        // Assignments and alerts
        .route("/assignments", get(assignments::list_assignments))
        .route(
            "/assignments/{id}",
            delete(assignments::delete_assignment),
        )
        .route("/alerts", get(alerts::list_alerts).post(alerts::create_alert))
        .route(
            "/alerts/{id}",
            put(alerts::update_alert).delete(alerts::delete_alert),
        )
        .route("/alerts/{id}/resolve", post(alerts::resolve_alert))
        // Derived views
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/dashboard/stats", get(dashboard::get_stats))
        .route("/reports/{kind}", get(reports::download_report))
        .route("/handover/{kind}/{id}", get(handover::get_handover))
        .route("/handover/{kind}/{id}/print", get(handover::print_handover))
        .route("/search", get(search::search))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/admin/backfill-location-ids", post(admin::backfill_location_ids))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
