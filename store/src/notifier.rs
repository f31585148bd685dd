//! Template-mail client for confirmation delivery.
//!
//! Sends `POST /send` with a template identifier and a parameter map. The
//! caller treats every failure as best effort; this client just reports them
//! faithfully.

use async_trait::async_trait;
use registrar_core::{ConfirmationMessage, Notifier, NotifyError};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// Connection settings for the mail API.
#[derive(Clone, Debug)]
pub struct MailerConfig {
    /// Base URL of the mail API
    pub base_url: String,
    /// API key sent in the `X-Api-Key` header
    pub api_key: String,
    /// Template to render for registration confirmations
    pub template_id: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest {
    template_id: String,
    to: String,
    params: HashMap<String, String>,
}

/// Notifier backed by the template-mail API.
#[derive(Clone)]
pub struct TemplateMailer {
    client: Client,
    config: MailerConfig,
}

impl TemplateMailer {
    /// Create a mailer with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Unavailable`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: MailerConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn send_request(&self, message: &ConfirmationMessage) -> SendRequest {
        let params = HashMap::from([
            ("name".to_string(), message.recipient_name.clone()),
            ("eventTitle".to_string(), message.event.title.clone()),
            ("eventDate".to_string(), message.event.date.clone()),
            ("eventTime".to_string(), message.event.time.clone()),
            ("venue".to_string(), message.event.venue.clone()),
        ]);
        SendRequest {
            template_id: self.config.template_id.clone(),
            to: message.recipient_email.clone(),
            params,
        }
    }
}

#[async_trait]
impl Notifier for TemplateMailer {
    async fn notify(&self, message: &ConfirmationMessage) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(format!("{}/send", self.config.base_url))
            .header("X-Api-Key", &self.config.api_key)
            .json(&self.send_request(message))
            .send()
            .await
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(NotifyError::DeliveryFailed(format!(
                "mail API returned {}",
                response.status()
            )))
        }
    }
}
