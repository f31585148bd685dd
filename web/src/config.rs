//! Configuration management for the registrar service.
//!
//! Loads configuration from environment variables with sensible defaults.

use registrar_store::{MailerConfig, StoreConfig};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Document store configuration
    pub store: StoreSettings,
    /// Mail API configuration
    pub mailer: MailerSettings,
    /// Admin allowlist (emails permitted to manage events)
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Document store settings
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Base URL of the document store API
    pub base_url: String,
    /// API key for the store
    pub api_key: String,
    /// Events collection name
    pub events_collection: String,
    /// Registrations collection name
    pub registrations_collection: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

/// Mail API settings
#[derive(Debug, Clone)]
pub struct MailerSettings {
    /// Base URL of the mail API
    pub base_url: String,
    /// API key for the mail API
    pub api_key: String,
    /// Confirmation template identifier
    pub template_id: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

/// Admin authorization configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Emails permitted to perform administrative actions
    pub allowlist: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            store: StoreSettings {
                base_url: env::var("STORE_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:9000/v1".to_string()),
                api_key: env::var("STORE_API_KEY").unwrap_or_default(),
                events_collection: env::var("STORE_EVENTS_COLLECTION")
                    .unwrap_or_else(|_| "events".to_string()),
                registrations_collection: env::var("STORE_REGISTRATIONS_COLLECTION")
                    .unwrap_or_else(|_| "registrations".to_string()),
                request_timeout: env::var("STORE_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            },
            mailer: MailerSettings {
                base_url: env::var("MAIL_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:9100/v1".to_string()),
                api_key: env::var("MAIL_API_KEY").unwrap_or_default(),
                template_id: env::var("MAIL_CONFIRMATION_TEMPLATE")
                    .unwrap_or_else(|_| "registration-confirmation".to_string()),
                request_timeout: env::var("MAIL_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            },
            admin: AdminConfig {
                allowlist: env::var("ADMIN_ALLOWLIST")
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

impl StoreSettings {
    /// Build the store client configuration.
    #[must_use]
    pub fn to_client_config(&self) -> StoreConfig {
        StoreConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            events_collection: self.events_collection.clone(),
            registrations_collection: self.registrations_collection.clone(),
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

impl MailerSettings {
    /// Build the mailer client configuration.
    #[must_use]
    pub fn to_client_config(&self) -> MailerConfig {
        MailerConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            template_id: self.template_id.clone(),
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_settings_convert_to_client_config() {
        let settings = StoreSettings {
            base_url: "https://store.example/v1".to_string(),
            api_key: "k".to_string(),
            events_collection: "events".to_string(),
            registrations_collection: "registrations".to_string(),
            request_timeout: 3,
        };
        let config = settings.to_client_config();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.events_collection, "events");
    }
}
