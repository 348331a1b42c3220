use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, Usage, DEFAULT_MODEL};

/// Request body for `responses.create`.
#[derive(Debug, Clone, Serialize)]
pub struct NewResponse {
    pub model: String,
    pub input: Vec<ChatMessage>,
    /// Knowledge-base references (collection mappings) to ground the
    /// response in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_bases: Option<Vec<serde_json::Value>>,
    /// Run asynchronously; poll `responses.get` for progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
}

impl NewResponse {
    /// A request against [`DEFAULT_MODEL`].
    pub fn new(input: Vec<ChatMessage>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            input,
            knowledge_bases: None,
            background: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_knowledge_bases(mut self, knowledge_bases: Vec<serde_json::Value>) -> Self {
        self.knowledge_bases = Some(knowledge_bases);
        self
    }

    pub fn with_background(mut self, background: bool) -> Self {
        self.background = Some(background);
        self
    }
}

/// A model response, possibly still running when created in background mode.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseObject {
    #[serde(alias = "response_id")]
    pub id: String,
    /// "in_progress", "completed", "failed", or "cancelled".
    pub status: String,
    #[serde(default)]
    pub model: Option<String>,
    /// Output items produced so far.
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub usage: Option<Usage>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ResponseObject {
    /// Terminal = won't change anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), "completed" | "failed" | "cancelled")
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}
