//! # Registrar Store
//!
//! REST clients for the registrar service's external collaborators:
//!
//! - [`CollectionStore`]: the hosted document-collection API
//!   (implements `registrar_core::DocumentStore`)
//! - [`TemplateMailer`]: the template-mail delivery API
//!   (implements `registrar_core::Notifier`)
//!
//! Both clients carry bounded per-request timeouts so a slow backend cannot
//! hang a registration request.

#![forbid(unsafe_code)]

pub mod client;
pub mod documents;
pub mod notifier;

pub use client::{CollectionStore, StoreConfig};
pub use notifier::{MailerConfig, TemplateMailer};
