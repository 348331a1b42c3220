use serde::{Deserialize, Serialize};

/// Request body for `transcribe.create`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTranscribe {
    /// `cloudglue://`, `http(s)://`, or YouTube URL.
    pub url: String,
}

/// A transcription job. `data` is populated once the job completes.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeJob {
    pub job_id: String,
    /// "pending", "processing", "completed", or "failed".
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Transcript payload as returned by the API.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TranscribeJob {
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
