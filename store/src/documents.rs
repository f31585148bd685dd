//! Wire representations of store documents.
//!
//! Documents use camelCase field names. The document's own id travels as
//! `documentId`, separate from any domain identifiers inside the body.

use chrono::{DateTime, Utc};
use registrar_core::{Event, EventId, Registration, TicketId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A list query result.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    /// Matching documents
    pub documents: Vec<T>,
    /// Total match count
    #[serde(default)]
    pub total: usize,
}

/// An event document as stored in the events collection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    /// Document id (the event id)
    pub document_id: String,
    /// Display title
    pub title: String,
    /// Display date
    pub date: String,
    /// Display time
    pub time: String,
    /// Venue name
    pub venue: String,
    /// Ticket price, if paid
    pub price: Option<f64>,
    /// Capacity; absent means unlimited
    pub capacity: Option<u32>,
    /// Denormalized registration count
    #[serde(default)]
    pub registered_count: u32,
}

impl EventDocument {
    /// Build the wire document for an event.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            document_id: event.id.as_str().to_string(),
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            venue: event.venue.clone(),
            price: event.price,
            capacity: event.capacity,
            registered_count: event.registered_count,
        }
    }

    /// Convert into the domain event.
    #[must_use]
    pub fn into_event(self) -> Event {
        Event {
            id: EventId::new(self.document_id),
            title: self.title,
            date: self.date,
            time: self.time,
            venue: self.venue,
            price: self.price,
            capacity: self.capacity,
            registered_count: self.registered_count,
        }
    }
}

/// A registration document as stored in the registrations collection.
///
/// `document_id` is the deterministic UUIDv5 of the `(event, user)` pair, so
/// the store's create-with-id conflict enforces uniqueness. The ticket id is
/// a separate field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDocument {
    /// Document id, derived from `(eventId, userId)`
    pub document_id: String,
    /// Ticket id issued to the user
    pub ticket_id: Uuid,
    /// Event document id
    pub event_id: String,
    /// User document id
    pub user_id: String,
    /// Display name
    pub user_name: String,
    /// Email address
    pub user_email: String,
    /// Commit timestamp
    pub registered_at: DateTime<Utc>,
}

impl RegistrationDocument {
    /// Build the wire document for a registration.
    #[must_use]
    pub fn from_registration(registration: &Registration) -> Self {
        Self {
            document_id: Registration::document_id(
                &registration.event_id,
                &registration.user_id,
            ),
            ticket_id: *registration.id.as_uuid(),
            event_id: registration.event_id.as_str().to_string(),
            user_id: registration.user_id.as_str().to_string(),
            user_name: registration.user_name.clone(),
            user_email: registration.user_email.clone(),
            registered_at: registration.registered_at,
        }
    }

    /// Convert into the domain registration.
    #[must_use]
    pub fn into_registration(self) -> Registration {
        Registration {
            id: TicketId::from_uuid(self.ticket_id),
            event_id: EventId::new(self.event_id),
            user_id: UserId::new(self.user_id),
            user_name: self.user_name,
            user_email: self.user_email,
            registered_at: self.registered_at,
        }
    }
}
