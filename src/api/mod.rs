//! REST API Client
//!
//! Thin HTTP wrapper around the task backend, organized by resource.

mod auth;
mod settings;
mod tasks;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;

// Re-export all endpoint wrappers
pub use auth::*;
pub use settings::*;
pub use tasks::*;

/// HTTP client bound to a base URL and an optional bearer token
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.config.url(path))).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.post(self.config.url(path)).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.put(self.config.url(path)).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: serde_json::from_str(&text).unwrap_or(Value::Null),
            });
        }
        decode_body(&text)
    }
}

/// Decode a response body; an empty body decodes as JSON `null`
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let result = if text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(text)
    };
    result.map_err(|e| ApiError::Decode(e.to_string()))
}
