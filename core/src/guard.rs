//! Registration guard: decides whether a user may be admitted to an event.
//!
//! The guard performs the read side of admission: existing-registration
//! lookup, event lookup, capacity check. On its own this is check-then-act
//! and racy; the orchestrator closes the race by running the guard and the
//! subsequent write inside a per-event admission lane.

use crate::error::StoreError;
use crate::store::DocumentStore;
use crate::types::{EventId, UserId};
use std::sync::Arc;

/// Outcome of an admission check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The user may register
    Admit,
    /// The user already holds a registration for this event
    AlreadyRegistered,
    /// The event has reached its capacity
    EventFull,
    /// No event exists with the given id
    EventNotFound,
}

/// Decides admit/reject for a `(event, user)` pair against the store.
#[derive(Clone)]
pub struct RegistrationGuard {
    store: Arc<dyn DocumentStore>,
}

impl RegistrationGuard {
    /// Create a guard over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Check whether `user_id` may register for `event_id`.
    ///
    /// Checks run in order: duplicate registration, event existence,
    /// capacity. The first failing check wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either lookup fails; nothing has been
    /// written at that point, so the whole request aborts.
    pub async fn admit(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Decision, StoreError> {
        if self
            .store
            .find_registration(event_id, user_id)
            .await?
            .is_some()
        {
            return Ok(Decision::AlreadyRegistered);
        }

        let Some(event) = self.store.get_event(event_id).await? else {
            return Ok(Decision::EventNotFound);
        };

        if event.is_full() {
            return Ok(Decision::EventFull);
        }

        Ok(Decision::Admit)
    }
}
