//! Event endpoints.
//!
//! - `GET /events/:id` — public event detail
//! - `POST /admin/events` — create an event, gated by the authorization
//!   policy on the `X-Admin-Email` header

use crate::error::ApiError;
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use registrar_core::{AdminAction, Event, EventId, StoreError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event detail response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    /// Event document id
    pub id: String,
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
    /// Denormalized registration count (best-effort display value)
    pub registered_count: u32,
    /// Whether the event has reached capacity
    pub full: bool,
}

impl EventResponse {
    fn from_event(event: Event) -> Self {
        let full = event.is_full();
        Self {
            id: event.id.to_string(),
            title: event.title,
            date: event.date,
            time: event.time,
            venue: event.venue,
            price: event.price,
            capacity: event.capacity,
            registered_count: event.registered_count,
            full,
        }
    }
}

/// Get event details by id.
///
/// # Errors
///
/// - 404 when no event with the given id exists
/// - 500 when the store is unreachable
pub async fn get_event(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = state
        .store
        .get_event(&EventId::new(event_id.clone()))
        .await
        .map_err(|e| {
            ApiError::internal("Could not load the event").with_source(anyhow::anyhow!(e))
        })?
        .ok_or_else(|| ApiError::not_found("Event", &event_id))?;

    Ok(Json(EventResponse::from_event(event)))
}

/// Request to create a new event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Document id; generated when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Display date
    pub date: String,
    /// Display time
    pub time: String,
    /// Venue name
    pub venue: String,
    /// Ticket price, if paid
    #[serde(default)]
    pub price: Option<f64>,
    /// Capacity; absent means unlimited
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Create a new event. Requires an allowlisted `X-Admin-Email` header.
///
/// # Errors
///
/// - 403 when the header is missing or the policy rejects the identity
/// - 409 when an event with the same id already exists
/// - 500 when the store is unreachable
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let identity = headers
        .get("X-Admin-Email")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::forbidden("Administrative access required"))?;

    if !state
        .policy
        .is_authorized(identity, AdminAction::ManageEvents)
    {
        tracing::warn!(identity, "rejected admin event creation");
        return Err(ApiError::forbidden("Administrative access required"));
    }

    let event = Event {
        id: EventId::new(
            request
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
        ),
        title: request.title,
        date: request.date,
        time: request.time,
        venue: request.venue,
        price: request.price,
        capacity: request.capacity,
        registered_count: 0,
    };

    match state.store.create_event(&event).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(EventResponse::from_event(event)))),
        Err(StoreError::Duplicate) => Err(ApiError::conflict(
            "An event with this id already exists",
            "DUPLICATE_EVENT",
        )),
        Err(err) => {
            Err(ApiError::internal("Could not create the event").with_source(anyhow::anyhow!(err)))
        }
    }
}
