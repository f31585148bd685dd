//! Router configuration for the registrar service.

use super::health::{health_check, readiness_check};
use super::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// - `POST /events/register` — the registration flow
/// - `GET /events/:id` — event detail
/// - `POST /admin/events` — event creation, policy-gated
/// - `GET /health`, `GET /ready` — probes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/events/register", post(crate::api::registrations::register))
        .route("/events/:id", get(crate::api::events::get_event))
        .route("/admin/events", post(crate::api::events::create_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
