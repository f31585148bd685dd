//! Error taxonomy for the registration service.
//!
//! Three layers of errors cross this crate's boundaries:
//! - [`StoreError`]: failures of the external document store client
//! - [`NotifyError`]: failures of the confirmation notifier
//! - [`RegistrationError`]: what the orchestrator surfaces to callers
//!
//! Store failures during admission abort the request. Counter and notifier
//! failures after the registration is durable are logged and swallowed; they
//! must never surface as a request failure.

use thiserror::Error;

/// Errors from the document store client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested document does not exist
    #[error("document not found")]
    NotFound,

    /// A document with the same id already exists
    #[error("document already exists")]
    Duplicate,

    /// The store could not be reached or timed out
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store responded with something this client cannot interpret
    #[error("malformed store response: {0}")]
    Malformed(String),
}

/// Errors from the confirmation notifier.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The delivery provider rejected or failed the send
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),

    /// The provider could not be reached or timed out
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the registration orchestrator.
///
/// Business-rule rejections (`AlreadyRegistered`, `EventFull`,
/// `EventNotFound`) are distinguished from true failures so the caller can
/// render "you're already in" differently from a retry-able error.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Caller input malformed or missing; no side effects occurred
    #[error("invalid request: {0}")]
    Validation(String),

    /// The user already holds a registration for this event
    #[error("user is already registered for this event")]
    AlreadyRegistered,

    /// The event has reached its capacity
    #[error("event is full")]
    EventFull,

    /// No event exists with the given id
    #[error("event not found")]
    EventNotFound,

    /// Store unreachable, malformed response, or other unexpected failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for RegistrationError {
    /// Map admission-path store failures to orchestrator errors.
    ///
    /// `Duplicate` means the registration write hit an existing document for
    /// the same `(event, user)` pair, which is a duplicate registration, not
    /// an internal fault.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::AlreadyRegistered,
            StoreError::NotFound => Self::EventNotFound,
            StoreError::Unavailable(msg) | StoreError::Malformed(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_store_error_maps_to_already_registered() {
        let err: RegistrationError = StoreError::Duplicate.into();
        assert!(matches!(err, RegistrationError::AlreadyRegistered));
    }

    #[test]
    fn test_unavailable_store_error_maps_to_internal() {
        let err: RegistrationError = StoreError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, RegistrationError::Internal(_)));
    }
}
