//! REST client for the hosted document-collection API.
//!
//! The store exposes collections of JSON documents:
//!
//! - `GET    /collections/{name}/documents/{id}` — fetch by id
//! - `GET    /collections/{name}/documents?field=value` — list with filter
//! - `POST   /collections/{name}/documents` — create (body carries `documentId`)
//! - `PATCH  /collections/{name}/documents/{id}` — partial update
//!
//! Creating a document whose `documentId` already exists yields `409`, which
//! this client maps to [`StoreError::Duplicate`]. Registration documents use
//! the deterministic id from [`Registration::document_id`], so the store's
//! conflict check doubles as the `(event, user)` uniqueness constraint.

use crate::documents::{EventDocument, ListResponse, RegistrationDocument};
use async_trait::async_trait;
use registrar_core::{DocumentStore, Event, EventId, Registration, StoreError, UserId};
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;

/// Connection settings for the document store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base URL of the document store API
    pub base_url: String,
    /// API key sent in the `X-Api-Key` header
    pub api_key: String,
    /// Name of the events collection
    pub events_collection: String,
    /// Name of the registrations collection
    pub registrations_collection: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

/// Document store client backed by the hosted collection API.
#[derive(Clone)]
pub struct CollectionStore {
    client: Client,
    config: StoreConfig,
}

impl CollectionStore {
    /// Create a client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/collections/{collection}/documents/{id}",
            self.config.base_url
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/collections/{collection}/documents", self.config.base_url)
    }
}

#[async_trait]
impl DocumentStore for CollectionStore {
    async fn get_event(&self, event_id: &EventId) -> Result<Option<Event>, StoreError> {
        let url = self.document_url(&self.config.events_collection, event_id.as_str());
        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let document: EventDocument = response
                    .json()
                    .await
                    .map_err(|e| StoreError::Malformed(e.to_string()))?;
                Ok(Some(document.into_event()))
            }
            status => Err(StoreError::Unavailable(format!(
                "event fetch returned {status}"
            ))),
        }
    }

    async fn create_event(&self, event: &Event) -> Result<(), StoreError> {
        let url = self.collection_url(&self.config.events_collection);
        let response = self
            .client
            .post(url)
            .header("X-Api-Key", &self.config.api_key)
            .json(&EventDocument::from_event(event))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::CONFLICT => Err(StoreError::Duplicate),
            status if status.is_success() => Ok(()),
            status => Err(StoreError::Unavailable(format!(
                "event create returned {status}"
            ))),
        }
    }

    async fn find_registration(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Option<Registration>, StoreError> {
        let url = self.collection_url(&self.config.registrations_collection);
        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.config.api_key)
            .query(&[("eventId", event_id.as_str()), ("userId", user_id.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "registration query returned {}",
                response.status()
            )));
        }

        let list: ListResponse<RegistrationDocument> = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(list
            .documents
            .into_iter()
            .next()
            .map(RegistrationDocument::into_registration))
    }

    async fn create_registration(&self, registration: &Registration) -> Result<(), StoreError> {
        let url = self.collection_url(&self.config.registrations_collection);
        let response = self
            .client
            .post(url)
            .header("X-Api-Key", &self.config.api_key)
            .json(&RegistrationDocument::from_registration(registration))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::CONFLICT => {
                tracing::debug!(
                    event_id = %registration.event_id,
                    user_id = %registration.user_id,
                    "registration create conflicted with an existing document"
                );
                Err(StoreError::Duplicate)
            }
            status if status.is_success() => Ok(()),
            status => Err(StoreError::Unavailable(format!(
                "registration create returned {status}"
            ))),
        }
    }

    async fn update_registered_count(
        &self,
        event_id: &EventId,
        registered_count: u32,
    ) -> Result<(), StoreError> {
        let url = self.document_url(&self.config.events_collection, event_id.as_str());
        let response = self
            .client
            .patch(url)
            .header("X-Api-Key", &self.config.api_key)
            .json(&json!({ "registeredCount": registered_count }))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            status if status.is_success() => Ok(()),
            status => Err(StoreError::Unavailable(format!(
                "count update returned {status}"
            ))),
        }
    }
}
