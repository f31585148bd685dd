//! HTTP API integration tests.
//!
//! Runs the full router against in-memory doubles and verifies the wire
//! contract: status codes, the response envelope, and the decoupling of
//! notification failures from registration success.

#![allow(clippy::unwrap_used)] // Integration tests can unwrap for setup

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use registrar_core::{AllowlistPolicy, Notifier, Registrar, SystemClock};
use registrar_testing::mocks::{FailingNotifier, InMemoryStore, RecordingNotifier};
use registrar_testing::sample_event;
use registrar_web::server::{AppState, build_router};
use serde_json::{Value, json};
use std::sync::Arc;

fn server_with(store: Arc<InMemoryStore>, notifier: Arc<dyn Notifier>) -> TestServer {
    let registrar = Arc::new(Registrar::new(
        store.clone(),
        notifier,
        Arc::new(SystemClock),
    ));
    let policy = Arc::new(AllowlistPolicy::new(vec!["admin@club.example".to_string()]));
    let state = AppState::new(registrar, store, policy);
    TestServer::new(build_router(state)).unwrap()
}

fn register_body(event_id: &str, user_id: &str) -> Value {
    json!({
        "eventId": event_id,
        "userId": user_id,
        "userName": format!("User {user_id}"),
        "userEmail": format!("{user_id}@example.com"),
    })
}

#[tokio::test]
async fn test_register_success_returns_ticket() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(50), 0));
    let server = server_with(store.clone(), Arc::new(RecordingNotifier::new()));

    let response = server
        .post("/events/register")
        .json(&register_body("e1", "u1"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(!body["ticketId"].as_str().unwrap().is_empty());
    assert_eq!(store.registrations().len(), 1);
}

#[tokio::test]
async fn test_register_missing_field_is_400_with_no_store_calls() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(50), 0));
    let server = server_with(store.clone(), Arc::new(RecordingNotifier::new()));

    let response = server
        .post("/events/register")
        .json(&json!({ "eventId": "e1", "userId": "u1", "userName": "Ada" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_register_unknown_event_is_404() {
    let store = Arc::new(InMemoryStore::new());
    let server = server_with(store, Arc::new(RecordingNotifier::new()));

    let response = server
        .post("/events/register")
        .json(&register_body("missing", "u1"))
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_register_duplicate_is_409() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(50), 0));
    let server = server_with(store.clone(), Arc::new(RecordingNotifier::new()));

    server
        .post("/events/register")
        .json(&register_body("e1", "u1"))
        .await
        .assert_status_ok();

    let response = server
        .post("/events/register")
        .json(&register_body("e1", "u1"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "ALREADY_REGISTERED");
    assert_eq!(store.registrations().len(), 1);
}

#[tokio::test]
async fn test_register_full_event_is_409() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(1), 1));
    let server = server_with(store, Arc::new(RecordingNotifier::new()));

    let response = server
        .post("/events/register")
        .json(&register_body("e1", "u2"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "EVENT_FULL");
}

#[tokio::test]
async fn test_register_succeeds_when_notifier_always_fails() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(50), 0));
    let server = server_with(store.clone(), Arc::new(FailingNotifier));

    let response = server
        .post("/events/register")
        .json(&register_body("e1", "u1"))
        .await;

    response.assert_status_ok();
    assert_eq!(store.registrations().len(), 1);
}

#[tokio::test]
async fn test_get_event_detail() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(50), 12));
    let server = server_with(store, Arc::new(RecordingNotifier::new()));

    let response = server.get("/events/e1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], "e1");
    assert_eq!(body["registeredCount"], 12);
    assert_eq!(body["full"], false);

    server.get("/events/nope").await.assert_status_not_found();
}

#[tokio::test]
async fn test_admin_event_creation_is_policy_gated() {
    let store = Arc::new(InMemoryStore::new());
    let server = server_with(store, Arc::new(RecordingNotifier::new()));

    let event = json!({
        "id": "e9",
        "title": "Summer Fair",
        "date": "2026-07-04",
        "time": "12:00",
        "venue": "Club Grounds",
        "capacity": 200,
    });

    // No header
    server
        .post("/admin/events")
        .json(&event)
        .await
        .assert_status_forbidden();

    let admin_header = HeaderName::from_static("x-admin-email");

    // Not on the allowlist
    server
        .post("/admin/events")
        .add_header(
            admin_header.clone(),
            HeaderValue::from_static("visitor@club.example"),
        )
        .json(&event)
        .await
        .assert_status_forbidden();

    // Allowlisted
    let response = server
        .post("/admin/events")
        .add_header(
            admin_header.clone(),
            HeaderValue::from_static("admin@club.example"),
        )
        .json(&event)
        .await;
    response.assert_status(StatusCode::CREATED);

    // The event is now visible and open for registration
    server.get("/events/e9").await.assert_status_ok();

    // Same id again conflicts
    server
        .post("/admin/events")
        .add_header(admin_header, HeaderValue::from_static("admin@club.example"))
        .json(&event)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_health_endpoints() {
    let store = Arc::new(InMemoryStore::new());
    let server = server_with(store, Arc::new(RecordingNotifier::new()));

    server.get("/health").await.assert_status_ok();
    server.get("/ready").await.assert_status_ok();
}
