//! The REST client
//!
//! One [`ApiClient`] is shared by every page and CLI command. Verbs map
//! one-to-one onto the backend's resource routes: `GET /{resource}`,
//! `POST /{resource}`, `PUT /{resource}/{id}`, `DELETE /{resource}/{id}`,
//! with `Authorization: Bearer <token>` on every call. There is no retry,
//! no idempotency key, and no request cancellation here; staleness is
//! handled above the transport by the view-level load guard.

use hosteldesk_core::{DeskError, DeskResult, RecordId, Resource};
use hosteldesk_model::User;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::session::Session;

/// Error body shape the backend uses for rejections
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Success body of `POST /users/login`
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

/// HTTP client for the hostel-management backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to a default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// The configured API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// Sign in and return the session to persist
    pub async fn login(&self, email: &str, password: &str) -> DeskResult<Session> {
        let response = self
            .http
            .post(self.url("users/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| DeskError::transport(e.to_string()))?;

        let body: LoginResponse = Self::decode(Self::check(response).await?).await?;
        Ok(Session {
            token: body.token,
            user: body.user,
        })
    }

    // ========================================================================
    // CRUD verbs
    // ========================================================================

    /// Fetch a full collection.
    ///
    /// A non-array body decodes to an empty collection rather than an
    /// error; list pages treat "nothing usable" and "nothing" the same.
    pub async fn list<T: Resource>(&self, session: &Session) -> DeskResult<Vec<T>> {
        let response = self
            .http
            .get(self.url(T::PATH))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .send()
            .await
            .map_err(|e| DeskError::transport(e.to_string()))?;

        let body: Value = Self::decode(Self::check(response).await?).await?;
        match body {
            Value::Array(_) => {
                serde_json::from_value(body).map_err(|e| DeskError::Decode(e.to_string()))
            }
            other => {
                tracing::warn!(
                    resource = T::PATH,
                    "expected an array, got {other}; treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Create a record from a raw JSON draft
    pub async fn create_raw(
        &self,
        session: &Session,
        path: &str,
        body: &Value,
    ) -> DeskResult<Value> {
        let response = self
            .http
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| DeskError::transport(e.to_string()))?;
        Self::decode(Self::check(response).await?).await
    }

    /// Update a record from a raw JSON draft.
    ///
    /// `id` is the one captured when the form was opened for editing, never
    /// one read back out of the draft.
    pub async fn update_raw(
        &self,
        session: &Session,
        path: &str,
        id: &RecordId,
        body: &Value,
    ) -> DeskResult<Value> {
        let response = self
            .http
            .put(format!("{}/{}", self.url(path), id))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| DeskError::transport(e.to_string()))?;
        Self::decode(Self::check(response).await?).await
    }

    /// Update a typed record in place (quick status toggles)
    pub async fn update<T: Resource>(&self, session: &Session, record: &T) -> DeskResult<Value> {
        let body = serde_json::to_value(record)?;
        self.update_raw(session, T::PATH, record.id(), &body).await
    }

    /// Delete a record by id
    pub async fn delete(&self, session: &Session, path: &str, id: &RecordId) -> DeskResult<()> {
        let response = self
            .http
            .delete(format!("{}/{}", self.url(path), id))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .send()
            .await
            .map_err(|e| DeskError::transport(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    // ========================================================================
    // Response handling
    // ========================================================================

    /// Map a non-success status to a `DeskError`, surfacing the server's
    /// `message` field when it sent one.
    async fn check(response: reqwest::Response) -> DeskResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message);
        Err(DeskError::api(status.as_u16(), message))
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> DeskResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| DeskError::Decode(e.to_string()))
    }
}
