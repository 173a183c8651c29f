use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::intake::router::{fetch_handler, submit_handler};
use crate::intake::service::IntakeService;

#[tokio::test]
async fn submit_route_returns_created_with_receipt() {
    let (service, _store) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("message"),
        Some(&json!("Application submitted successfully"))
    );
    assert_eq!(body.get("applicationId"), Some(&json!("app-000001")));
}

#[tokio::test]
async fn submit_route_rejects_missing_required_fields() {
    let (service, store) = build_service();
    let router = intake_router_with_service(service);

    let mut bad = payload();
    bad.phone = None;

    let response = router
        .oneshot(
            axum::http::Request::post("/api/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&bad).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&json!("Please fill in all required fields"))
    );
    assert!(store.records.lock().expect("store mutex").is_empty());
}

#[tokio::test]
async fn submit_route_rejects_empty_collections() {
    let (service, _store) = build_service();
    let router = intake_router_with_service(service);

    let mut no_members = payload();
    no_members.family_members.clear();
    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&no_members).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&json!("Please add at least one family member"))
    );

    let mut no_banks = payload();
    no_banks.selected_banks.clear();
    let response = router
        .oneshot(
            axum::http::Request::post("/api/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&no_banks).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&json!("Please select at least one bank"))
    );
}

#[tokio::test]
async fn submit_route_rejects_malformed_members_with_bad_request() {
    let (service, _store) = build_service();
    let router = intake_router_with_service(service);

    let mut bad = payload();
    bad.family_members[0].income = None;

    let response = router
        .oneshot(
            axum::http::Request::post("/api/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&bad).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&json!("Family member 1 is missing a valid income"))
    );
}

#[tokio::test]
async fn submit_handler_masks_store_failures() {
    let service = Arc::new(IntakeService::new(Arc::new(UnavailableStore)));

    let response =
        submit_handler::<UnavailableStore>(State(service), axum::Json(payload())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&json!(
            "An error occurred while saving your application. Please try again."
        ))
    );
}

#[tokio::test]
async fn fetch_handler_returns_the_stored_document() {
    let (service, _store) = build_service();
    let record = service.submit(payload()).expect("submission succeeds");

    let response = fetch_handler::<MemoryStore>(
        State(service),
        axum::extract::Path(record.application_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("applicationId"), Some(&json!("app-000001")));
    assert_eq!(body.get("name"), Some(&json!("Avery Coleman")));
    assert_eq!(body.get("annualIncome"), Some(&json!(86_500.0)));
    assert_eq!(body.get("status"), Some(&json!("pending")));
    assert!(body.get("createdAt").is_some());
    assert_eq!(
        body.get("familyMembers")
            .and_then(|members| members.as_array())
            .map(|members| members.len()),
        Some(2)
    );
    assert_eq!(body.get("selectedBanks"), Some(&json!([1, 3, 9])));
}

#[tokio::test]
async fn fetch_route_distinguishes_absent_from_malformed_identifiers() {
    let (service, _store) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::get("/api/applications/app-999999")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body.get("error"), Some(&json!("Application not found")));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/applications/garbage")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("error"),
        Some(&json!("invalid application identifier"))
    );
}
