//! Dispatch tests for the maintenance route surface.
//!
//! Drives the router directly with `tower::ServiceExt::oneshot` — no
//! listener, no network. Asserts that the served routes, their parameter
//! typing, and their response envelopes agree with the route table.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use maintenance_core::route::RouteName;
use maintenance_server::routes;
use maintenance_server::state::AppState;

/// Build the router the same way `main` does, minus middleware.
fn app() -> Router {
    let table = routes::table().expect("route table must build");
    routes::router(Arc::new(AppState::new(table)))
}

async fn get(path: &str) -> (StatusCode, serde_json::Value) {
    let response = app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

async fn post_json(path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn list_view_answers_with_envelope() {
    let (status, body) = get("/maintenance/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "list");
    assert_eq!(body["links"]["create"], "/maintenance/create/");
}

#[tokio::test]
async fn detail_extracts_pk_and_links_actions() {
    let (status, body) = get("/maintenance/42/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "detail");
    assert_eq!(body["maintenance_id"], 42);
    assert_eq!(body["links"]["edit"], "/maintenance/42/edit/");
    assert_eq!(body["links"]["start"], "/maintenance/status/42/start/");
}

#[tokio::test]
async fn edit_accepts_post() {
    let (status, body) = post_json("/maintenance/42/edit/", "{}").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["route"], "edit");
    assert_eq!(body["maintenance_id"], 42);
}

#[tokio::test]
async fn non_integer_pk_is_rejected() {
    let (status, _) = post_json("/maintenance/abc/edit/", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = get("/maintenance/unknown/path/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn method_mismatch_is_rejected() {
    // `create` is POST-only.
    let (status, _) = get("/maintenance/create/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn month_events_extracts_year_and_month() {
    let (status, body) = get("/maintenance/api/calendar-month/2024/3/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "api_month_events");
    assert_eq!(body["year"], 2024);
    assert_eq!(body["month"], 3);
}

#[tokio::test]
async fn month_out_of_range_is_bad_request() {
    let (status, body) = get("/maintenance/api/calendar-month/2024/13/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn non_integer_month_is_rejected() {
    let (status, _) = get("/maintenance/api/calendar-month/2024/march/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_transition_links_back_to_record() {
    let (status, body) = post_json("/maintenance/status/7/start/", "{}").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["route"], "start");
    assert_eq!(body["maintenance_id"], 7);
    assert_eq!(body["links"]["detail"], "/maintenance/7/");
}

#[tokio::test]
async fn update_status_validates_vocabulary() {
    let (status, body) =
        post_json("/maintenance/api/7/update-status/", r#"{"status":"completed"}"#).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "completed");

    let (status, body) =
        post_json("/maintenance/api/7/update-status/", r#"{"status":"broken"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn quick_status_is_served_alongside_update_status() {
    let (status, body) =
        post_json("/maintenance/api/7/quick-status/", r#"{"status":"on_hold"}"#).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["route"], "quick_status");
}

#[tokio::test]
async fn bulk_update_rejects_empty_selection() {
    let (status, _) =
        post_json("/maintenance/bulk-update/", r#"{"ids":[],"status":"completed"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) =
        post_json("/maintenance/bulk-update/", r#"{"ids":[1,2],"status":"completed"}"#).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["ids"], serde_json::json!([1, 2]));
}

#[tokio::test]
async fn search_echoes_query() {
    let (status, body) = get("/maintenance/search/?q=printer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "search");
    assert_eq!(body["query"], "printer");
}

#[tokio::test]
async fn doubled_api_prefix_routes_are_served() {
    let (status, body) =
        post_json("/maintenance/api/api/check-device/", r#"{"device_id":5}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "check_device");
    assert_eq!(body["valid"], true);

    let (status, body) = get("/maintenance/api/api/estimate-cost/?device_id=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "estimate_cost");
}

#[tokio::test]
async fn csv_exports_answer_text_csv() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/maintenance/api/export/simple-csv/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/csv"), "got {content_type}");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.starts_with("id,device_id,status"), "got {body}");
}

#[tokio::test]
async fn health_reports_every_route() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["routes"], serde_json::json!(RouteName::ALL.len()));
}
