//! Tests for the best-effort capacity counter against the in-memory store.
//!
//! These live as integration tests rather than a `#[cfg(test)]` module in
//! `core/src/counter.rs`: the helpers in `registrar-testing` link the
//! externally-built `registrar-core`, which the compiler treats as a
//! different crate from the `cfg(test)` build of the library itself.

#![allow(clippy::unwrap_used)]

use registrar_core::{CapacityCounter, CounterStatus, EventId};
use registrar_testing::mocks::InMemoryStore;
use registrar_testing::sample_event;
use std::sync::Arc;

#[tokio::test]
async fn test_increment_applies() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(10), 4));
    let counter = CapacityCounter::new(store.clone());

    let status = counter.increment(&EventId::new("e1")).await;
    assert_eq!(status, CounterStatus::Applied);
    assert_eq!(store.event(&EventId::new("e1")).unwrap().registered_count, 5);
}

#[tokio::test]
async fn test_increment_on_missing_event_fails_quietly() {
    let store = Arc::new(InMemoryStore::new());
    let counter = CapacityCounter::new(store);

    let status = counter.increment(&EventId::new("gone")).await;
    assert_eq!(status, CounterStatus::Failed);
}

#[tokio::test]
async fn test_increment_swallows_write_failure() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_event(sample_event("e1", Some(10), 4));
    store.set_fail_increments(true);
    let counter = CapacityCounter::new(store.clone());

    let status = counter.increment(&EventId::new("e1")).await;
    assert_eq!(status, CounterStatus::Failed);
    assert_eq!(store.event(&EventId::new("e1")).unwrap().registered_count, 4);
}
