mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use asset_compass_api::build_router;

use common::{add_asset, add_location, test_state};

async fn get(path: &str, state: asset_compass_api::handlers::AppState) -> axum::response::Response {
    build_router(state)
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_database() {
    let state = test_state().await;
    let response = get("/health", state).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_unknown_asset_is_404_with_error_body() {
    let state = test_state().await;
    let response = get(&format!("/assets/{}", Uuid::new_v4()), state).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_empty_report_is_rejected() {
    let state = test_state().await;
    let response = get("/reports/inventory", state).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inventory_report_downloads_as_csv() {
    let state = test_state().await;
    add_location(&state, "Head Office").await;
    add_asset(&state, "Developer Laptop", "Head Office").await;

    let response = get("/reports/inventory", state).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"inventory_report_"));
    assert!(disposition.ends_with(".csv\""));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.lines().nth(1).unwrap().contains("\"Developer Laptop\""));
}

#[tokio::test]
async fn test_create_location_validates_body() {
    let state = test_state().await;
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/locations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"","type":"office"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["fields"][0]["field"], "name");
}
