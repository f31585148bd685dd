//! # Registrar Testing
//!
//! Test doubles and helpers for the registrar service:
//! - [`mocks::InMemoryStore`]: in-memory document store with call counters
//!   and failure injection
//! - [`mocks::RecordingNotifier`] / [`mocks::FailingNotifier`]: notifier
//!   doubles for asserting delivery attempts and decoupling
//! - [`mocks::FixedClock`]: deterministic time
//!
//! ## Example
//!
//! ```
//! use registrar_testing::{mocks::InMemoryStore, sample_event};
//!
//! let store = InMemoryStore::new();
//! store.insert_event(sample_event("e1", Some(50), 0));
//! assert_eq!(store.call_count(), 0); // seeding doesn't count as a store call
//! ```

#![forbid(unsafe_code)]

use registrar_core::{Event, EventId};

/// Mock implementations of the store, notifier, and clock contracts.
pub mod mocks {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use registrar_core::{
        Clock, ConfirmationMessage, DocumentStore, Event, EventId, Notifier, NotifyError,
        Registration, StoreError, UserId,
    };
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// In-memory document store double.
    ///
    /// Enforces `(event, user)` uniqueness on registration writes the way
    /// the production store does, counts every store call so tests can
    /// assert "zero side effects", and supports failure injection for the
    /// best-effort paths.
    #[derive(Debug, Default)]
    pub struct InMemoryStore {
        events: Mutex<HashMap<EventId, Event>>,
        registrations: Mutex<HashMap<(EventId, UserId), Registration>>,
        calls: AtomicUsize,
        fail_reads: AtomicBool,
        fail_creates: AtomicBool,
        fail_increments: AtomicBool,
    }

    impl InMemoryStore {
        /// Create an empty store.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed an event without counting a store call.
        pub fn insert_event(&self, event: Event) {
            self.lock_events().insert(event.id.clone(), event);
        }

        /// Seed a registration without counting a store call.
        pub fn insert_registration(&self, registration: Registration) {
            self.lock_registrations().insert(
                (registration.event_id.clone(), registration.user_id.clone()),
                registration,
            );
        }

        /// Total number of store calls made through the trait.
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Current state of an event, if present.
        #[must_use]
        pub fn event(&self, event_id: &EventId) -> Option<Event> {
            self.lock_events().get(event_id).cloned()
        }

        /// All persisted registrations.
        #[must_use]
        pub fn registrations(&self) -> Vec<Registration> {
            self.lock_registrations().values().cloned().collect()
        }

        /// Make every read fail with `StoreError::Unavailable`.
        pub fn set_fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        /// Make registration/event creation fail with `StoreError::Unavailable`.
        pub fn set_fail_creates(&self, fail: bool) {
            self.fail_creates.store(fail, Ordering::SeqCst);
        }

        /// Make `update_registered_count` fail with `StoreError::Unavailable`.
        pub fn set_fail_increments(&self, fail: bool) {
            self.fail_increments.store(fail, Ordering::SeqCst);
        }

        fn lock_events(&self) -> std::sync::MutexGuard<'_, HashMap<EventId, Event>> {
            self.events.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn lock_registrations(
            &self,
        ) -> std::sync::MutexGuard<'_, HashMap<(EventId, UserId), Registration>> {
            self.registrations
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
        }

        fn record_call(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl DocumentStore for InMemoryStore {
        async fn get_event(&self, event_id: &EventId) -> Result<Option<Event>, StoreError> {
            self.record_call();
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable("injected read failure".to_string()));
            }
            Ok(self.lock_events().get(event_id).cloned())
        }

        async fn create_event(&self, event: &Event) -> Result<(), StoreError> {
            self.record_call();
            if self.fail_creates.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable(
                    "injected create failure".to_string(),
                ));
            }
            let mut events = self.lock_events();
            if events.contains_key(&event.id) {
                return Err(StoreError::Duplicate);
            }
            events.insert(event.id.clone(), event.clone());
            Ok(())
        }

        async fn find_registration(
            &self,
            event_id: &EventId,
            user_id: &UserId,
        ) -> Result<Option<Registration>, StoreError> {
            self.record_call();
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable("injected read failure".to_string()));
            }
            Ok(self
                .lock_registrations()
                .get(&(event_id.clone(), user_id.clone()))
                .cloned())
        }

        async fn create_registration(&self, registration: &Registration) -> Result<(), StoreError> {
            self.record_call();
            if self.fail_creates.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable(
                    "injected create failure".to_string(),
                ));
            }
            let key = (registration.event_id.clone(), registration.user_id.clone());
            let mut registrations = self.lock_registrations();
            if registrations.contains_key(&key) {
                return Err(StoreError::Duplicate);
            }
            registrations.insert(key, registration.clone());
            Ok(())
        }

        async fn update_registered_count(
            &self,
            event_id: &EventId,
            registered_count: u32,
        ) -> Result<(), StoreError> {
            self.record_call();
            if self.fail_increments.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable(
                    "injected increment failure".to_string(),
                ));
            }
            let mut events = self.lock_events();
            let Some(event) = events.get_mut(event_id) else {
                return Err(StoreError::NotFound);
            };
            event.registered_count = registered_count;
            Ok(())
        }
    }

    /// Notifier double that records every delivered message.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<ConfirmationMessage>>,
    }

    impl RecordingNotifier {
        /// Create an empty recorder.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Messages delivered so far.
        #[must_use]
        pub fn sent(&self) -> Vec<ConfirmationMessage> {
            self.sent
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, message: &ConfirmationMessage) -> Result<(), NotifyError> {
            self.sent
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(message.clone());
            Ok(())
        }
    }

    /// Notifier double that fails every delivery.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _message: &ConfirmationMessage) -> Result<(), NotifyError> {
            Err(NotifyError::DeliveryFailed(
                "injected notifier failure".to_string(),
            ))
        }
    }

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making tests reproducible.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time.
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2026-01-01 00:00:00 UTC).
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Build an event with display metadata filled in.
#[must_use]
pub fn sample_event(id: &str, capacity: Option<u32>, registered_count: u32) -> Event {
    Event {
        id: EventId::new(id),
        title: "Open Mic Night".to_string(),
        date: "2026-09-12".to_string(),
        time: "18:30".to_string(),
        venue: "Clubhouse".to_string(),
        price: Some(5.0),
        capacity,
        registered_count,
    }
}

// Re-export commonly used items
pub use mocks::{FailingNotifier, FixedClock, InMemoryStore, RecordingNotifier, test_clock};

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_core::DocumentStore;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        use registrar_core::Clock;
        assert_eq!(clock.now(), clock.now());
    }

    #[tokio::test]
    async fn test_store_counts_calls() {
        let store = InMemoryStore::new();
        store.insert_event(sample_event("e1", Some(5), 0));
        assert_eq!(store.call_count(), 0);

        let _ = store.get_event(&EventId::new("e1")).await;
        let _ = store.get_event(&EventId::new("e2")).await;
        assert_eq!(store.call_count(), 2);
    }
}
