//! Tests for the registration guard against the in-memory store double.
//!
//! These live as integration tests rather than a `#[cfg(test)]` module in
//! `core/src/guard.rs`: the helpers in `registrar-testing` link the
//! externally-built `registrar-core`, which the compiler treats as a
//! different crate from the `cfg(test)` build of the library itself.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use registrar_core::{Decision, EventId, Registration, RegistrationGuard, TicketId, UserId};
use registrar_testing::mocks::InMemoryStore;
use registrar_testing::sample_event;
use std::sync::Arc;

#[tokio::test]
async fn test_admit_when_open_and_unregistered() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(10), 3));
    let guard = RegistrationGuard::new(store);

    let decision = guard
        .admit(&EventId::new("e1"), &UserId::new("u1"))
        .await
        .unwrap();
    assert_eq!(decision, Decision::Admit);
}

#[tokio::test]
async fn test_event_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let guard = RegistrationGuard::new(store);

    let decision = guard
        .admit(&EventId::new("missing"), &UserId::new("u1"))
        .await
        .unwrap();
    assert_eq!(decision, Decision::EventNotFound);
}

#[tokio::test]
async fn test_event_full() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(2), 2));
    let guard = RegistrationGuard::new(store);

    let decision = guard
        .admit(&EventId::new("e1"), &UserId::new("u1"))
        .await
        .unwrap();
    assert_eq!(decision, Decision::EventFull);
}

#[tokio::test]
async fn test_duplicate_wins_over_full() {
    // A user already holding a ticket to a now-full event should see
    // "already registered", not "event full".
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(1), 1));
    store.insert_registration(Registration {
        id: TicketId::new(),
        event_id: EventId::new("e1"),
        user_id: UserId::new("u1"),
        user_name: "Ada".to_string(),
        user_email: "ada@example.com".to_string(),
        registered_at: Utc::now(),
    });
    let guard = RegistrationGuard::new(store);

    let decision = guard
        .admit(&EventId::new("e1"), &UserId::new("u1"))
        .await
        .unwrap();
    assert_eq!(decision, Decision::AlreadyRegistered);
}

#[tokio::test]
async fn test_unlimited_capacity_admits() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", None, 5000));
    let guard = RegistrationGuard::new(store);

    let decision = guard
        .admit(&EventId::new("e1"), &UserId::new("u1"))
        .await
        .unwrap();
    assert_eq!(decision, Decision::Admit);
}
