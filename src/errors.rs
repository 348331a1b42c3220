use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::api::TransportError;

/// All errors that can occur when using the CloudGlue SDK.
#[derive(Error, Debug)]
pub enum CloudGlueError {
    /// Invalid client-side setup: a missing API key, an unrecognized filter
    /// key, or an invalid argument combination. Raised before any network
    /// call is made.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A failed API call, normalized from the transport layer.
    #[error("{0}")]
    Api(ApiError),

    /// An I/O error, typically from reading a local file before upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Waiting for a job or file to finish exceeded the configured timeout.
    #[error("poll timed out after {0:?}")]
    Timeout(Duration),
}

impl CloudGlueError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The primary human-readable message for this error.
    pub fn message(&self) -> String {
        match self {
            Self::Configuration { message } => message.clone(),
            Self::Api(err) => err.message.clone(),
            Self::Io(err) => err.to_string(),
            Self::Timeout(timeout) => format!("poll timed out after {timeout:?}"),
        }
    }

    /// The HTTP status code of the failed call, when the server responded.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status_code,
            _ => None,
        }
    }
}

/// Transport context for a failed API call.
///
/// Every field the server sent is carried through; fields it did not send
/// are `None`, so callers can tell an absent value apart from an empty one.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub message: String,
    /// HTTP status code, when the server responded.
    pub status_code: Option<u16>,
    /// Response body, parsed as JSON when possible, the raw text otherwise.
    pub response_body: Option<serde_json::Value>,
    /// Response headers, when the server responded.
    pub headers: Option<HashMap<String, String>>,
    /// HTTP reason phrase, when known.
    pub reason: Option<String>,
}

impl ApiError {
    /// An error that carries only a message, with no transport context.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            response_body: None,
            headers: None,
            reason: None,
        }
    }

    /// Normalizes a transport-layer failure.
    ///
    /// The message is taken from the response body's `error` field, then its
    /// `message` field, then the HTTP reason phrase, and finally falls back
    /// to `HTTP {status}`.
    pub fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Status {
                status,
                reason,
                body,
                headers,
            } => {
                let message = body
                    .as_ref()
                    .and_then(|b| b.get("error").or_else(|| b.get("message")))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .or_else(|| reason.clone())
                    .unwrap_or_else(|| format!("HTTP {status}"));
                Self {
                    message,
                    status_code: Some(status),
                    response_body: body,
                    headers: Some(headers),
                    reason,
                }
            }
            TransportError::Request(err) => Self::from_message(err.to_string()),
            TransportError::Encode(err) => {
                Self::from_message(format!("failed to encode request body: {err}"))
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status_code, self.reason.as_deref()) {
            (Some(status), Some(reason)) => {
                write!(f, "API error {status} ({reason}): {}", self.message)
            }
            (Some(status), None) => write!(f, "API error {status}: {}", self.message),
            (None, _) => f.write_str(&self.message),
        }
    }
}

impl From<TransportError> for CloudGlueError {
    fn from(err: TransportError) -> Self {
        Self::Api(ApiError::from_transport(err))
    }
}

/// A convenience alias for `Result<T, CloudGlueError>`.
pub type Result<T> = std::result::Result<T, CloudGlueError>;
