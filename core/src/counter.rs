//! Best-effort capacity counter.
//!
//! Maintains the denormalized `registeredCount` on event documents. The
//! count is a display value, not a source of truth: a failed increment is
//! logged at WARN and swallowed, because by the time the counter runs the
//! registration document is already durable and the request must succeed.

use crate::store::DocumentStore;
use crate::types::EventId;
use std::sync::Arc;

/// Outcome of an increment attempt, for observability and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStatus {
    /// The new count was written
    Applied,
    /// The read or write failed; the count may now lag the true number of
    /// registrations
    Failed,
}

/// Increments the denormalized registration count on event documents.
#[derive(Clone)]
pub struct CapacityCounter {
    store: Arc<dyn DocumentStore>,
}

impl CapacityCounter {
    /// Create a counter over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read-modify-write `registeredCount + 1` for the event.
    ///
    /// Never fails: any store error is logged and reported as
    /// [`CounterStatus::Failed`]. Callers must run this inside the event's
    /// admission lane so the read and write cannot interleave with another
    /// admission for the same event.
    pub async fn increment(&self, event_id: &EventId) -> CounterStatus {
        let event = match self.store.get_event(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                tracing::warn!(event_id = %event_id, "count increment skipped: event vanished");
                return CounterStatus::Failed;
            }
            Err(err) => {
                tracing::warn!(event_id = %event_id, error = %err, "count increment read failed");
                return CounterStatus::Failed;
            }
        };

        let next = event.registered_count.saturating_add(1);
        match self.store.update_registered_count(event_id, next).await {
            Ok(()) => CounterStatus::Applied,
            Err(err) => {
                tracing::warn!(event_id = %event_id, error = %err, "count increment write failed");
                CounterStatus::Failed
            }
        }
    }
}
