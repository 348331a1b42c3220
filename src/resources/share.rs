use serde_json::Value;

use crate::api::ShareApi;
use crate::errors::Result;
use crate::models::{
    DeleteResponse, NewShareableAsset, Page, ShareFilter, ShareableAsset, UpdateShareableAsset,
};

/// Public share links for files and collections.
#[derive(Debug, Clone)]
pub struct Share {
    api: ShareApi,
}

impl Share {
    pub(crate) fn new(api: ShareApi) -> Self {
        Self { api }
    }

    /// Create a share link for a file or collection.
    ///
    /// `asset_type` is "file" or "collection"; `expires_at` is ISO 8601 and
    /// absent means the link does not expire.
    pub async fn create(
        &self,
        asset_type: &str,
        asset_id: &str,
        name: Option<&str>,
        expires_at: Option<&str>,
    ) -> Result<ShareableAsset> {
        let request = NewShareableAsset {
            asset_type: asset_type.to_string(),
            asset_id: asset_id.to_string(),
            name: name.map(str::to_string),
            expires_at: expires_at.map(str::to_string),
        };
        Ok(self.api.create_shareable_asset(&request).await?)
    }

    /// Fetch a share link by its identifier.
    pub async fn get(&self, shareable_asset_id: &str) -> Result<ShareableAsset> {
        Ok(self.api.get_shareable_asset(shareable_asset_id).await?)
    }

    /// List share links.
    ///
    /// `filter` is a plain mapping; recognized keys: `asset_type`,
    /// `created_before`, `created_after`.
    pub async fn list(
        &self,
        filter: Option<&Value>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<ShareableAsset>> {
        let filter = filter.map(ShareFilter::from_value).transpose()?;
        Ok(self
            .api
            .list_shareable_assets(filter.as_ref(), cursor, limit)
            .await?)
    }

    /// Update a share link's name or expiry. Unset fields are left unchanged.
    pub async fn update(
        &self,
        shareable_asset_id: &str,
        name: Option<&str>,
        expires_at: Option<&str>,
    ) -> Result<ShareableAsset> {
        let request = UpdateShareableAsset {
            name: name.map(str::to_string),
            expires_at: expires_at.map(str::to_string),
        };
        Ok(self
            .api
            .update_shareable_asset(shareable_asset_id, &request)
            .await?)
    }

    /// Revoke a share link. The underlying asset is kept.
    pub async fn delete(&self, shareable_asset_id: &str) -> Result<DeleteResponse> {
        Ok(self.api.delete_shareable_asset(shareable_asset_id).await?)
    }
}
