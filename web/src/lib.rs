//! # Registrar Web
//!
//! Axum HTTP layer for the registrar service: configuration, application
//! state, routes, and the server binary. Handlers are thin adapters over
//! `registrar_core::Registrar`; all business rules and failure semantics
//! live there.

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use server::{AppState, build_router};
