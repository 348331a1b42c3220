use serde_json::Value;

use crate::api::ChatApi;
use crate::errors::Result;
use crate::models::{ChatCompletion, ChatCompletionFilter, ChatCompletionRequest};

/// Chat namespace. Completion operations live under
/// [`completions`](Self::completions).
#[derive(Debug, Clone)]
pub struct Chat {
    pub completions: Completions,
}

impl Chat {
    pub(crate) fn new(api: ChatApi) -> Self {
        Self {
            completions: Completions::new(api),
        }
    }
}

/// Chat completions grounded in video collections.
#[derive(Debug, Clone)]
pub struct Completions {
    api: ChatApi,
}

impl Completions {
    pub(crate) fn new(api: ChatApi) -> Self {
        Self { api }
    }

    /// Create a chat completion.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloudglue::{ChatCompletionRequest, ChatMessage, Client};
    ///
    /// # async fn example() -> cloudglue::Result<()> {
    /// let client = Client::new("your-api-key");
    /// let request = ChatCompletionRequest::new(vec![ChatMessage::user(
    ///     "Which videos mention the new pricing?",
    /// )])
    /// .with_collections(vec!["col_abc123".into()])
    /// .with_include_citations(true);
    ///
    /// let completion = client.chat.completions.create(request).await?;
    /// println!("{}", completion.content().unwrap_or_default());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: ChatCompletionRequest) -> Result<ChatCompletion> {
        Ok(self.api.create_completion(&request).await?)
    }

    /// Build a typed filter from per-scope condition mappings.
    ///
    /// Each condition recognizes the keys `path`, `operator`, `value_text` /
    /// `valueText`, and `value_text_array` / `valueTextArray`; anything else
    /// fails with a configuration error.
    pub fn create_filter(
        &self,
        metadata: Option<&[Value]>,
        video_info: Option<&[Value]>,
        file: Option<&[Value]>,
    ) -> Result<ChatCompletionFilter> {
        ChatCompletionFilter::from_parts(metadata, video_info, file)
    }
}
