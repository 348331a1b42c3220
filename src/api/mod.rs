//! Typed operation clients for the CloudGlue REST API.
//!
//! Each submodule wraps one endpoint group with thin, per-operation methods.
//! Failures surface as [`TransportError`]; the resource facades in
//! [`crate::resources`] normalize them into [`crate::CloudGlueError`].

use std::collections::HashMap;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

mod chat;
mod collections;
mod describe;
mod extract;
mod files;
mod responses;
mod share;
mod transcribe;

pub use chat::ChatApi;
pub use collections::CollectionsApi;
pub use describe::DescribeApi;
pub use extract::ExtractApi;
pub use files::FilesApi;
pub use responses::ResponsesApi;
pub use share::ShareApi;
pub use transcribe::TranscribeApi;

/// Transport settings shared by every operation client.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL without a trailing slash, e.g. `https://api.cloudglue.dev/v1`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Maximum number of retries for transient failures.
    pub max_retries: u32,
}

/// A structured failure raised by the operation layer.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success status code.
    #[error("HTTP status {status}")]
    Status {
        status: u16,
        /// Canonical reason phrase for the status, when known.
        reason: Option<String>,
        /// Response body, parsed as JSON when possible, the raw text otherwise.
        body: Option<serde_json::Value>,
        headers: HashMap<String, String>,
    },

    /// The request never produced a usable response (connection, timeout, or
    /// body-decoding failure).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Shared HTTP engine behind the operation clients.
///
/// Holds the connection pool and credentials; operation clients share one
/// instance through an [`std::sync::Arc`].
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Configuration,
}

impl ApiClient {
    pub fn new(config: Configuration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("cloudglue-rust/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let url = format!("{}{}", self.config.base_url, path);
        self.execute(&Method::GET, path, || {
            let mut req = self.http.get(&url).bearer_auth(&self.config.api_key);
            if !query.is_empty() {
                req = req.query(query);
            }
            req
        })
        .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let body = serde_json::to_value(body)?;
        let url = format!("{}{}", self.config.base_url, path);
        self.execute(&Method::POST, path, || {
            self.http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(&body)
        })
        .await
    }

    /// POST without a request body, used by action endpoints such as cancel.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, TransportError> {
        let url = format!("{}{}", self.config.base_url, path);
        self.execute(&Method::POST, path, || {
            self.http.post(&url).bearer_auth(&self.config.api_key)
        })
        .await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let body = serde_json::to_value(body)?;
        let url = format!("{}{}", self.config.base_url, path);
        self.execute(&Method::PATCH, path, || {
            self.http
                .patch(&url)
                .bearer_auth(&self.config.api_key)
                .json(&body)
        })
        .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, TransportError> {
        let url = format!("{}{}", self.config.base_url, path);
        self.execute(&Method::DELETE, path, || {
            self.http.delete(&url).bearer_auth(&self.config.api_key)
        })
        .await
    }

    /// POST a multipart form with a `file` part and an optional `metadata`
    /// part holding a JSON string.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        metadata: Option<&serde_json::Value>,
    ) -> Result<T, TransportError> {
        let url = format!("{}{}", self.config.base_url, path);
        self.execute(&Method::POST, path, || {
            // The form is consumed on send, so rebuild it per attempt.
            let mut form = Form::new().part(
                "file",
                Part::bytes(bytes.clone()).file_name(file_name.to_string()),
            );
            if let Some(metadata) = metadata {
                form = form.text("metadata", metadata.to_string());
            }
            self.http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .multipart(form)
        })
        .await
    }

    /// Execute a request with automatic retry for transient failures.
    ///
    /// Retries are performed for:
    /// - HTTP 5xx server errors
    /// - HTTP 429 rate-limit responses
    /// - Network-level errors (connection refused, timeout, etc.)
    ///
    /// Exponential backoff is applied: 1s, 2s, 4s, ...
    async fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        build: impl Fn() -> reqwest::RequestBuilder,
    ) -> Result<T, TransportError> {
        let mut last_err: Option<TransportError> = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let backoff = Duration::from_secs(1 << (attempt - 1).min(5));
                tracing::debug!(%method, path, attempt, ?backoff, "retrying request");
                tokio::time::sleep(backoff).await;
            }

            let response = match build().send().await {
                Ok(response) => response,
                Err(err) => {
                    // Network-level error: retry if we have attempts left.
                    last_err = Some(TransportError::Request(err));
                    continue;
                }
            };

            let status = response.status();
            tracing::debug!(%method, path, status = status.as_u16(), "api response");

            // Successful response: deserialize and return.
            if status.is_success() {
                return response.json().await.map_err(TransportError::Request);
            }

            let err = status_error(status, response).await;

            // Retry on 5xx or 429; return immediately for other errors.
            if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                last_err = Some(err);
                continue;
            }

            return Err(err);
        }

        // All retries exhausted.
        Err(last_err.unwrap_or_else(|| TransportError::Status {
            status: 0,
            reason: Some("request failed after all retries".to_string()),
            body: None,
            headers: HashMap::new(),
        }))
    }
}

/// Capture status, reason, headers, and body from an error response.
async fn status_error(status: StatusCode, response: reqwest::Response) -> TransportError {
    let reason = status.canonical_reason().map(str::to_string);

    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let text = response.text().await.unwrap_or_default();
    let body = if text.is_empty() {
        None
    } else {
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(_) => Some(serde_json::Value::String(text)),
        }
    };

    TransportError::Status {
        status: status.as_u16(),
        reason,
        body,
        headers,
    }
}

/// Append the shared pagination parameters to a query string.
pub(crate) fn page_params(
    query: &mut Vec<(&'static str, String)>,
    cursor: Option<&str>,
    limit: Option<u32>,
) {
    if let Some(cursor) = cursor {
        query.push(("cursor", cursor.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
}
