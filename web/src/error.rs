//! Error type bridging domain errors and HTTP responses.
//!
//! Every error renders as the API's uniform JSON envelope:
//! `{"success": false, "message": ..., "error": CODE}` with the matching
//! HTTP status. Business-rule rejections keep distinct codes so clients can
//! render "you're already in" differently from retry-able failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registrar_core::RegistrationError;
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Stable error code (for client error handling)
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl ApiError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
        }
    }

    /// Attach a source error for logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into(), "VALIDATION_ERROR")
    }

    /// Create a 403 Forbidden error.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message.into(), "FORBIDDEN")
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(resource: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{resource} with id {id} not found"),
            "NOT_FOUND",
        )
    }

    /// Create a 409 Conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>, code: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message.into(), code)
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "INTERNAL_ERROR",
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Validation(msg) => Self::bad_request(msg),
            RegistrationError::AlreadyRegistered => Self::conflict(
                "You are already registered for this event",
                "ALREADY_REGISTERED",
            ),
            RegistrationError::EventFull => {
                Self::conflict("This event has reached its capacity", "EVENT_FULL")
            }
            RegistrationError::EventNotFound => Self::not_found("Event", "the requested id"),
            RegistrationError::Internal(msg) => {
                Self::internal("Registration could not be completed, please try again")
                    .with_source(anyhow::anyhow!(msg))
            }
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Always `false` on the error path.
    success: bool,
    /// Human-readable error message.
    message: String,
    /// Stable error code.
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    error = %source,
                    "internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    "internal server error"
                );
            }
        }

        let body = ErrorBody {
            success: false,
            message: self.message,
            error: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}
