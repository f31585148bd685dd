//! Domain types for the registration service.
//!
//! Events and registrations live in an external document collection, so
//! identifiers are opaque document-id strings rather than locally generated
//! integers. Ticket identifiers are minted by this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for an event (document id in the events collection).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    /// Create an `EventId` from a document id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user (document id in the users collection).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a `UserId` from a document id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ticket (registration document).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Mint a fresh random `TicketId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `TicketId` from a `Uuid`.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// An event open for registration.
///
/// `registered_count` is a denormalized display value maintained by the
/// capacity counter. It is the input to capacity checks but not a source of
/// truth; see the orchestrator for how drift is bounded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event document id
    pub id: EventId,
    /// Display title
    pub title: String,
    /// Display date (e.g. "2026-09-12")
    pub date: String,
    /// Display time (e.g. "18:30")
    pub time: String,
    /// Venue name
    pub venue: String,
    /// Ticket price, if the event is paid
    pub price: Option<f64>,
    /// Maximum number of registrations; `None` means unlimited
    pub capacity: Option<u32>,
    /// Denormalized number of registrations so far
    pub registered_count: u32,
}

impl Event {
    /// Whether the event has reached its capacity.
    ///
    /// Events without a capacity are never full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.registered_count >= capacity)
    }

    /// Summary used in confirmation messages.
    #[must_use]
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            venue: self.venue.clone(),
        }
    }
}

/// A registration of one user for one event.
///
/// Created once at the durability point of the registration flow; never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Ticket id (also the registration document's primary identifier)
    pub id: TicketId,
    /// Event the user registered for
    pub event_id: EventId,
    /// Registering user
    pub user_id: UserId,
    /// Display name at time of registration
    pub user_name: String,
    /// Email address for the confirmation
    pub user_email: String,
    /// When the registration was committed
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Deterministic document id for this registration's `(event, user)` pair.
    ///
    /// Derived with UUIDv5 so that two writers racing on the same pair target
    /// the same document id and the store's create conflict surfaces the
    /// duplicate instead of silently storing two registrations.
    #[must_use]
    pub fn document_id(event_id: &EventId, user_id: &UserId) -> String {
        let name = format!("{}:{}", event_id.as_str(), user_id.as_str());
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
    }
}

/// Display summary of an event, carried in confirmation messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Event title
    pub title: String,
    /// Display date
    pub date: String,
    /// Display time
    pub time: String,
    /// Venue name
    pub venue: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with(capacity: Option<u32>, registered_count: u32) -> Event {
        Event {
            id: EventId::new("e1"),
            title: "Open Mic Night".to_string(),
            date: "2026-09-12".to_string(),
            time: "18:30".to_string(),
            venue: "Clubhouse".to_string(),
            price: None,
            capacity,
            registered_count,
        }
    }

    #[test]
    fn test_event_full_at_capacity() {
        assert!(event_with(Some(10), 10).is_full());
        assert!(event_with(Some(10), 11).is_full());
        assert!(!event_with(Some(10), 9).is_full());
    }

    #[test]
    fn test_unlimited_event_never_full() {
        assert!(!event_with(None, 1_000_000).is_full());
    }

    #[test]
    fn test_registration_document_id_is_deterministic() {
        let a = Registration::document_id(&EventId::new("e1"), &UserId::new("u1"));
        let b = Registration::document_id(&EventId::new("e1"), &UserId::new("u1"));
        let c = Registration::document_id(&EventId::new("e1"), &UserId::new("u2"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
