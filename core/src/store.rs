//! Document store contract.
//!
//! The registration flow runs against an external hosted document-collection
//! API. This trait is the seam between the domain logic and that API: the
//! `registrar-store` crate provides the REST-backed implementation, and
//! `registrar-testing` provides an in-memory double with call counters.

use crate::error::StoreError;
use crate::types::{Event, EventId, Registration, UserId};
use async_trait::async_trait;

/// Read/write access to the events and registrations collections.
///
/// # Uniqueness
///
/// `create_registration` must reject a second registration for the same
/// `(event, user)` pair with [`StoreError::Duplicate`]. Implementations
/// backed by the hosted store achieve this by writing under the
/// deterministic document id from [`Registration::document_id`]; the
/// in-memory double enforces it directly.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch an event by id. `Ok(None)` when no such document exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unreachable or responds with
    /// something unexpected.
    async fn get_event(&self, event_id: &EventId) -> Result<Option<Event>, StoreError>;

    /// Create an event document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if an event with the same id exists,
    /// or another [`StoreError`] on transport failure.
    async fn create_event(&self, event: &Event) -> Result<(), StoreError>;

    /// Find an existing registration for `(event, user)`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unreachable or responds with
    /// something unexpected.
    async fn find_registration(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Option<Registration>, StoreError>;

    /// Persist a registration. This is the durability point of the flow.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] when a registration for the same
    /// `(event, user)` pair already exists, or another [`StoreError`] on
    /// transport failure.
    async fn create_registration(&self, registration: &Registration) -> Result<(), StoreError>;

    /// Overwrite an event's denormalized `registeredCount`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the event vanished, or another
    /// [`StoreError`] on transport failure.
    async fn update_registered_count(
        &self,
        event_id: &EventId,
        registered_count: u32,
    ) -> Result<(), StoreError>;
}
