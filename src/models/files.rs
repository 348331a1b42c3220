use serde::Deserialize;

/// An uploaded file. Check `status` or use the `is_*` helpers.
#[derive(Debug, Clone, Deserialize)]
pub struct FileObject {
    #[serde(alias = "file_id")]
    pub id: String,
    /// "processing", "ready", "failed", or "not_applicable".
    pub status: String,
    #[serde(default)]
    pub filename: Option<String>,
    /// `cloudglue://` URI accepted by the extract, describe, and transcribe
    /// endpoints.
    #[serde(default)]
    pub uri: Option<String>,
    /// File size in bytes.
    #[serde(default)]
    pub bytes: Option<u64>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Metadata supplied at upload time.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub video_info: Option<VideoInfo>,
}

impl FileObject {
    /// Terminal = processing won't advance anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status.as_str(),
            "ready" | "completed" | "failed" | "not_applicable"
        )
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status.as_str(), "ready" | "completed")
    }

    /// Status is "failed".
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }
}

/// Technical properties of an uploaded video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Container format, e.g. "mp4".
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub has_audio: Option<bool>,
}
