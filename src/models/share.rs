use serde::{Deserialize, Serialize};

/// Request body for `share.create`.
#[derive(Debug, Clone, Serialize)]
pub struct NewShareableAsset {
    /// "file" or "collection".
    pub asset_type: String,
    /// Identifier of the file or collection being shared.
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 8601. Absent means the link does not expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Request body for `share.update`. Only set fields are changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShareableAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// A public link to a file or collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareableAsset {
    #[serde(alias = "shareable_asset_id")]
    pub id: String,
    /// "file" or "collection".
    pub asset_type: String,
    pub asset_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Public URL serving the shared asset.
    #[serde(default)]
    pub url: Option<String>,
    /// ISO 8601.
    #[serde(default)]
    pub expires_at: Option<String>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}
