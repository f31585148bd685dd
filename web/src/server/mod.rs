//! HTTP server module for the registrar service.
//!
//! Provides application state, health checks, and router configuration.

pub mod health;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
