use std::sync::Arc;
use std::time::Duration;

use crate::api::{
    ApiClient, ChatApi, CollectionsApi, Configuration, DescribeApi, ExtractApi, FilesApi,
    ResponsesApi, ShareApi, TranscribeApi,
};
use crate::errors::{CloudGlueError, Result};
use crate::resources::{
    Chat, Collections, Describe, Extract, Files, Responses, Share, Transcribe,
};

const DEFAULT_BASE_URL: &str = "https://api.cloudglue.dev/v1";
const API_KEY_ENV: &str = "CLOUDGLUE_API_KEY";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use cloudglue::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> cloudglue::Result<()> {
/// let client = ClientBuilder::new()
///     .api_key("your-api-key")
///     .base_url("https://api.cloudglue.dev/v1")
///     .max_retries(5)
///     .timeout(Duration::from_secs(120))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    max_retries: u32,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://api.cloudglue.dev/v1`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the maximum number of retries for transient errors (defaults to 3).
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the HTTP request timeout (defaults to 60 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Build the [`Client`].
    ///
    /// If no API key was set via [`api_key`](Self::api_key), the builder will
    /// attempt to read the `CLOUDGLUE_API_KEY` environment variable.
    ///
    /// Returns [`CloudGlueError::Configuration`] if no key is available from
    /// either source. Resolution happens here, at construction, never at the
    /// first call.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                CloudGlueError::configuration(
                    "API key is required. Pass it to ClientBuilder::api_key() \
                     or set the CLOUDGLUE_API_KEY environment variable.",
                )
            })?;

        Client::from_configuration(Configuration {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: self.timeout,
            max_retries: self.max_retries,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The CloudGlue API client.
///
/// Each API area is a public field, so calls read as
/// `client.files.upload(...)` or `client.chat.completions.create(...)`.
/// All areas share one connection pool; the client can be shared across
/// tasks and cloned cheaply per field.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full
/// control.
///
/// # Example
///
/// ```no_run
/// use cloudglue::Client;
///
/// # async fn example() -> cloudglue::Result<()> {
/// let client = Client::new("your-api-key");
///
/// let file = client.files.upload("meeting.mp4", None).await?;
/// let file = client.files.wait_until_ready(&file.id, None).await?;
/// println!("{} is {}", file.id, file.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    /// Chat completions over video collections.
    pub chat: Chat,
    /// File upload and management.
    pub files: Files,
    /// Collections and the videos inside them.
    pub collections: Collections,
    /// Structured entity extraction jobs.
    pub extract: Extract,
    /// Multimodal description jobs.
    pub describe: Describe,
    /// Transcription jobs.
    pub transcribe: Transcribe,
    /// Long-form responses with background execution.
    pub responses: Responses,
    /// Public share links.
    pub share: Share,
}

impl Client {
    /// Create a new client with the given API key and default settings.
    ///
    /// For customization, or to read the key from the environment, use
    /// [`ClientBuilder`] instead.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_configuration(Configuration {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        })
        .expect("failed to build HTTP client")
    }

    fn from_configuration(config: Configuration) -> Result<Self> {
        let core = Arc::new(ApiClient::new(config)?);

        Ok(Self {
            chat: Chat::new(ChatApi::new(Arc::clone(&core))),
            files: Files::new(FilesApi::new(Arc::clone(&core))),
            collections: Collections::new(CollectionsApi::new(Arc::clone(&core))),
            extract: Extract::new(ExtractApi::new(Arc::clone(&core))),
            describe: Describe::new(DescribeApi::new(Arc::clone(&core))),
            transcribe: Transcribe::new(TranscribeApi::new(Arc::clone(&core))),
            responses: Responses::new(ResponsesApi::new(Arc::clone(&core))),
            share: Share::new(ShareApi::new(core)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env manipulation stays in one test so the cases cannot race.
    #[test]
    fn build_resolves_key_from_argument_then_environment() {
        std::env::remove_var(API_KEY_ENV);
        let err = ClientBuilder::new().build().unwrap_err();
        match err {
            CloudGlueError::Configuration { message } => {
                assert!(message.contains("CLOUDGLUE_API_KEY"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }

        std::env::set_var(API_KEY_ENV, "env-key");
        assert!(ClientBuilder::new().build().is_ok());

        // An explicit key wins over the environment.
        assert!(ClientBuilder::new().api_key("arg-key").build().is_ok());
        std::env::remove_var(API_KEY_ENV);
    }
}
