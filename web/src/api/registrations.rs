//! Registration endpoint.
//!
//! `POST /events/register` — body `{eventId, userId, userName, userEmail}`,
//! response `{success, message, ticketId}` on 200, or the error envelope
//! with 400/404/409/500.

use crate::error::ApiError;
use crate::server::state::AppState;
use axum::{Json, extract::State};
use registrar_core::NewRegistration;
use serde::{Deserialize, Serialize};

/// Request to register a user for an event.
///
/// Fields are optional at the serde level so that missing keys reach the
/// orchestrator's validation and come back as the API's own 400 envelope
/// rather than a framework rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Event document id
    #[serde(default)]
    pub event_id: Option<String>,
    /// User document id
    #[serde(default)]
    pub user_id: Option<String>,
    /// Display name for the registration
    #[serde(default)]
    pub user_name: Option<String>,
    /// Email address for the confirmation
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Response after a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Message for the user
    pub message: String,
    /// Issued ticket id
    pub ticket_id: String,
}

/// Register a user for an event.
///
/// # Errors
///
/// - 400 when any field is missing or blank (no store access)
/// - 404 when the event does not exist
/// - 409 when the user is already registered or the event is full
/// - 500 when the store fails during admission
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let ticket = state
        .registrar
        .register(NewRegistration {
            event_id: request.event_id.unwrap_or_default(),
            user_id: request.user_id.unwrap_or_default(),
            user_name: request.user_name.unwrap_or_default(),
            user_email: request.user_email.unwrap_or_default(),
        })
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration confirmed. See you there!".to_string(),
        ticket_id: ticket.ticket_id.to_string(),
    }))
}
