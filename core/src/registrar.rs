//! Registration orchestrator.
//!
//! Composes the guard, the store write, the capacity counter, and the
//! notifier into one request flow with fixed ordering and failure semantics:
//!
//! 1. Validate inputs (no side effects on failure).
//! 2. Enter the event's admission lane, then run the guard.
//! 3. Create the registration document — the durability point. From here on
//!    the registration succeeds no matter what the counter or notifier do.
//! 4. Increment the denormalized count (best effort, still inside the lane).
//! 5. Leave the lane; send the confirmation (best effort).
//!
//! # Admission lanes
//!
//! Admission for a given event is serialized behind an async mutex, so two
//! concurrent requests cannot both pass the guard's capacity or duplicate
//! check before either has written. One lane per event id; the map only
//! grows with the number of distinct events touched by this process.

use crate::counter::{CapacityCounter, CounterStatus};
use crate::environment::Clock;
use crate::error::RegistrationError;
use crate::guard::{Decision, RegistrationGuard};
use crate::notify::{ConfirmationMessage, Notifier};
use crate::store::DocumentStore;
use crate::types::{EventId, Registration, TicketId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A registration request, as received from the HTTP layer.
///
/// All four fields are required; blank values fail validation before any
/// store access.
#[derive(Clone, Debug)]
pub struct NewRegistration {
    /// Target event document id
    pub event_id: String,
    /// Registering user's document id
    pub user_id: String,
    /// Display name for the registration record
    pub user_name: String,
    /// Email address for the confirmation
    pub user_email: String,
}

/// A successfully issued ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    /// Identifier of the created registration
    pub ticket_id: TicketId,
}

/// Orchestrates the registration flow against the store and notifier.
pub struct Registrar {
    store: Arc<dyn DocumentStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    guard: RegistrationGuard,
    counter: CapacityCounter,
    lanes: Mutex<HashMap<EventId, Arc<Mutex<()>>>>,
}

impl Registrar {
    /// Create an orchestrator over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn DocumentStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            guard: RegistrationGuard::new(store.clone()),
            counter: CapacityCounter::new(store.clone()),
            store,
            notifier,
            clock,
            lanes: Mutex::new(HashMap::new()),
        }
    }

    /// Register a user for an event.
    ///
    /// On success exactly one registration document has been created, one
    /// count increment has been attempted, and one confirmation has been
    /// attempted. There is no compensating transaction: if the write itself
    /// fails the caller receives [`RegistrationError::Internal`] and may
    /// safely retry.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::Validation`] when any field is blank
    /// - [`RegistrationError::AlreadyRegistered`] for a duplicate `(event, user)`
    /// - [`RegistrationError::EventFull`] when capacity is reached
    /// - [`RegistrationError::EventNotFound`] for an unknown event id
    /// - [`RegistrationError::Internal`] when the store fails during admission
    pub async fn register(&self, request: NewRegistration) -> Result<Ticket, RegistrationError> {
        let request = validate(request)?;
        let event_id = EventId::new(request.event_id.clone());
        let user_id = UserId::new(request.user_id.clone());

        let lane = self.lane(&event_id).await;
        let _admission = lane.lock().await;

        match self.guard.admit(&event_id, &user_id).await? {
            Decision::Admit => {}
            Decision::AlreadyRegistered => return Err(RegistrationError::AlreadyRegistered),
            Decision::EventFull => return Err(RegistrationError::EventFull),
            Decision::EventNotFound => return Err(RegistrationError::EventNotFound),
        }

        let registration = Registration {
            id: TicketId::new(),
            event_id: event_id.clone(),
            user_id: user_id.clone(),
            user_name: request.user_name,
            user_email: request.user_email,
            registered_at: self.clock.now(),
        };
        self.store.create_registration(&registration).await?;

        // Durability point reached. Everything below is best effort.
        let ticket = Ticket {
            ticket_id: registration.id,
        };
        tracing::info!(
            event_id = %event_id,
            user_id = %user_id,
            ticket_id = %ticket.ticket_id,
            "registration committed"
        );

        if self.counter.increment(&event_id).await == CounterStatus::Failed {
            tracing::warn!(event_id = %event_id, "registered count may lag actual registrations");
        }
        drop(_admission);

        self.send_confirmation(&event_id, &registration).await;

        Ok(ticket)
    }

    /// Get or create the admission lane for an event.
    async fn lane(&self, event_id: &EventId) -> Arc<Mutex<()>> {
        let mut lanes = self.lanes.lock().await;
        lanes
            .entry(event_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Best-effort confirmation delivery; never fails the request.
    async fn send_confirmation(&self, event_id: &EventId, registration: &Registration) {
        let event = match self.store.get_event(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                tracing::warn!(event_id = %event_id, "confirmation skipped: event vanished");
                return;
            }
            Err(err) => {
                tracing::warn!(event_id = %event_id, error = %err, "confirmation skipped: event read failed");
                return;
            }
        };

        let message = ConfirmationMessage {
            recipient_email: registration.user_email.clone(),
            recipient_name: registration.user_name.clone(),
            event: event.summary(),
        };
        if let Err(err) = self.notifier.notify(&message).await {
            tracing::warn!(
                event_id = %event_id,
                ticket_id = %registration.id,
                error = %err,
                "confirmation delivery failed"
            );
        }
    }
}

/// Reject blank fields before any store access.
fn validate(request: NewRegistration) -> Result<NewRegistration, RegistrationError> {
    let missing = [
        ("eventId", request.event_id.trim()),
        ("userId", request.user_id.trim()),
        ("userName", request.user_name.trim()),
        ("userEmail", request.user_email.trim()),
    ]
    .iter()
    .find(|(_, value)| value.is_empty())
    .map(|(field, _)| *field);

    match missing {
        Some(field) => Err(RegistrationError::Validation(format!(
            "{field} is required"
        ))),
        None => Ok(request),
    }
}
