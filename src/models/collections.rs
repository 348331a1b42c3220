use serde::{Deserialize, Serialize};

use crate::models::{DescribeConfig, ExtractConfig};

/// Request body for `collections.create`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCollection {
    pub name: String,
    /// The API rejects a null description, so an absent one is sent as "".
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describe_config: Option<DescribeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_config: Option<ExtractConfig>,
}

/// A collection of videos processed with shared settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    #[serde(alias = "collection_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub describe_config: Option<DescribeConfig>,
    #[serde(default)]
    pub extract_config: Option<ExtractConfig>,
    /// Number of videos currently in the collection.
    #[serde(default)]
    pub file_count: Option<u64>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Request body for `collections.add_video`.
#[derive(Debug, Clone, Serialize)]
pub struct AddCollectionFile {
    pub file_id: String,
}

/// Request body for `collections.add_youtube_video`.
#[derive(Debug, Clone, Serialize)]
pub struct AddYouTubeCollectionFile {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A video's membership and processing state within a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionFile {
    #[serde(alias = "id")]
    pub file_id: String,
    #[serde(default)]
    pub collection_id: Option<String>,
    /// "pending", "processing", "ready", "failed", or "not_applicable".
    pub status: String,
    #[serde(default)]
    pub filename: Option<String>,
    /// ISO 8601.
    #[serde(default, alias = "created_at")]
    pub added_at: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl CollectionFile {
    /// Terminal = collection-level processing won't advance anymore.
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

/// Entities extracted from one video in a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub file_id: Option<String>,
    /// Shape follows the collection's extract config.
    #[serde(default)]
    pub entities: serde_json::Value,
    /// Per-segment extraction output, when available.
    #[serde(default)]
    pub segment_entities: Option<serde_json::Value>,
}
