//! Application state for the registrar HTTP server.

use registrar_core::{AuthorizationPolicy, DocumentStore, Registrar};
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request.
#[derive(Clone)]
pub struct AppState {
    /// Registration orchestrator
    pub registrar: Arc<Registrar>,
    /// Document store, for direct reads (event detail) and admin writes
    pub store: Arc<dyn DocumentStore>,
    /// Authorization policy for administrative actions
    pub policy: Arc<dyn AuthorizationPolicy>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        registrar: Arc<Registrar>,
        store: Arc<dyn DocumentStore>,
        policy: Arc<dyn AuthorizationPolicy>,
    ) -> Self {
        Self {
            registrar,
            store,
            policy,
        }
    }
}
