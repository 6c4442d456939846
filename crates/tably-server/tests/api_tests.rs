//! Integration tests for the API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tably_core::{InMemoryStore, StatusRegister};
use tably_server::router::build_router;
use tably_server::state::AppState;
use tably_types::{Reservation, ReservationStatus};
use tower::ServiceExt;

fn make_state() -> Arc<AppState> {
    let register = Arc::new(StatusRegister::new(Box::new(InMemoryStore::new())));
    Arc::new(AppState::new(register))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_status(status: &str) -> Request<Body> {
    Request::put("/api/reservations/latest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!("{{\"status\": \"{status}\"}}")))
        .unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let state = make_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_get_latest_empty_is_not_found() {
    let state = make_state();
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/reservations/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_latest_returns_current_record() {
    let state = make_state();
    let created = state.register.create().await;
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::get("/api/reservations/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], created.id.to_string());
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn test_put_updates_status_and_announces() {
    let state = make_state();
    let created = state.register.create().await;

    // An observer connected before the mutation must receive exactly
    // one announcement carrying the new status.
    let (_sub, mut rx) = state.registry.register().await;

    let router = build_router(Arc::clone(&state));
    let response = router.oneshot(put_status("confirmed")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], created.id.to_string());
    assert_eq!(json["status"], "confirmed");

    let payload = rx.recv().await.unwrap();
    let pushed: Reservation = serde_json::from_str(&payload).unwrap();
    assert_eq!(pushed.id, created.id);
    assert_eq!(pushed.status, ReservationStatus::Confirmed);
    assert!(rx.try_recv().is_err());

    // The register reflects the mutation.
    let latest = state.register.latest().await.unwrap();
    assert_eq!(latest.status, ReservationStatus::Confirmed);
}

#[tokio::test]
async fn test_put_with_no_record_is_not_found_and_silent() {
    let state = make_state();
    let (_sub, mut rx) = state.registry.register().await;

    let router = build_router(Arc::clone(&state));
    let response = router.oneshot(put_status("confirmed")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // No announcement reaches observers for a no-effect mutation.
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_put_invalid_status_is_rejected_before_the_register() {
    let state = make_state();
    let created = state.register.create().await;

    let router = build_router(Arc::clone(&state));
    let response = router.oneshot(put_status("arrived")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The record is untouched.
    let latest = state.register.latest().await.unwrap();
    assert_eq!(latest.id, created.id);
    assert_eq!(latest.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn test_put_cancel_round_trip() {
    let state = make_state();
    state.register.create().await;

    let router = build_router(Arc::clone(&state));
    let response = router
        .clone()
        .oneshot(put_status("cancelled"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::get("/api/reservations/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "cancelled");
}
