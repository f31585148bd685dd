//! Confirmation notifier contract.
//!
//! Notification is strictly best-effort: it runs after the registration is
//! durable, and any failure is caught and logged by the orchestrator without
//! changing the outcome returned to the caller.

use crate::error::NotifyError;
use crate::types::EventSummary;
use async_trait::async_trait;

/// A confirmation message for a completed registration.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmationMessage {
    /// Recipient email address
    pub recipient_email: String,
    /// Recipient display name
    pub recipient_name: String,
    /// Event the recipient registered for
    pub event: EventSummary,
}

/// Best-effort delivery of registration confirmations.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] on any delivery failure. Callers on the
    /// registration path must swallow this error.
    async fn notify(&self, message: &ConfirmationMessage) -> Result<(), NotifyError>;
}
