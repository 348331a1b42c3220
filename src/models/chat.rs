use serde::{Deserialize, Serialize};

use crate::models::ChatCompletionFilter;

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "nimbus-001";

/// A single message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user", or "assistant".
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Request body for `chat.completions.create`.
///
/// Start from [`ChatCompletionRequest::new`] and chain the `with_*` methods
/// for everything else.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Collection ids the completion should search over.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ChatCompletionFilter>,
    /// Force retrieval even when the model would answer without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_citations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl ChatCompletionRequest {
    /// A request against [`DEFAULT_MODEL`] with no collections or filters.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages,
            collections: Vec::new(),
            filter: None,
            force_search: None,
            include_citations: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_collections(mut self, collections: Vec<String>) -> Self {
        self.collections = collections;
        self
    }

    pub fn with_filter(mut self, filter: ChatCompletionFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_force_search(mut self, force_search: bool) -> Self {
        self.force_search = Some(force_search);
        self
    }

    pub fn with_include_citations(mut self, include_citations: bool) -> Self {
        self.include_citations = Some(include_citations);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// A completed chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub created: Option<i64>,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
    /// Present when the request set `include_citations`.
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,
}

impl ChatCompletion {
    /// Content of the first choice, the common case.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: Option<u32>,
    pub message: ChatMessage,
    /// e.g. "stop", "length".
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// A video moment the completion drew on.
#[derive(Debug, Clone, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Seconds from video start.
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_without_unset_fields() {
        let request = ChatCompletionRequest::new(vec![ChatMessage::user("what happened?")])
            .with_collections(vec!["col-1".to_string()]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], DEFAULT_MODEL);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["collections"], json!(["col-1"]));
        let map = value.as_object().unwrap();
        assert!(!map.contains_key("filter"));
        assert!(!map.contains_key("temperature"));
        assert!(!map.contains_key("force_search"));
    }

    #[test]
    fn builders_set_optional_fields() {
        let request = ChatCompletionRequest::new(vec![ChatMessage::system("be brief")])
            .with_model("nimbus-002")
            .with_force_search(true)
            .with_include_citations(true)
            .with_max_tokens(256)
            .with_temperature(0.2)
            .with_top_p(0.9);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "nimbus-002");
        assert_eq!(value["force_search"], true);
        assert_eq!(value["include_citations"], true);
        assert_eq!(value["max_tokens"], 256);
    }

    #[test]
    fn content_helper_reads_first_choice() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "a summary"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }))
        .unwrap();
        assert_eq!(completion.content(), Some("a summary"));

        let empty: ChatCompletion = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(empty.content(), None);
    }
}
