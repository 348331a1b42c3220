use serde::{Deserialize, Serialize};

/// Request body for `extract.create`. At least one of `prompt` or `schema`
/// must be set; the facade checks this before sending.
#[derive(Debug, Clone, Serialize)]
pub struct NewExtract {
    /// `cloudglue://`, `http(s)://`, or YouTube URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// An extraction job. `data` is populated once the job completes.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractJob {
    pub job_id: String,
    /// "pending", "processing", "completed", or "failed".
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
    /// Extracted entities; shape follows the prompt or schema.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ExtractJob {
    /// Terminal = won't change anymore ("completed" or "failed").
    pub fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), "completed" | "failed")
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    /// Status is "failed".
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }
}
