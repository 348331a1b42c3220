use std::sync::Arc;

use crate::api::{page_params, ApiClient, TransportError};
use crate::models::{
    DeleteResponse, NewShareableAsset, Page, ShareFilter, ShareableAsset, UpdateShareableAsset,
};

/// Operation client for the `/share` endpoints.
#[derive(Debug, Clone)]
pub struct ShareApi {
    client: Arc<ApiClient>,
}

impl ShareApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /share`
    pub async fn create_shareable_asset(
        &self,
        request: &NewShareableAsset,
    ) -> Result<ShareableAsset, TransportError> {
        self.client.post("/share", request).await
    }

    /// `GET /share/{shareable_asset_id}`
    pub async fn get_shareable_asset(
        &self,
        shareable_asset_id: &str,
    ) -> Result<ShareableAsset, TransportError> {
        self.client
            .get(&format!("/share/{shareable_asset_id}"), &[])
            .await
    }

    /// `GET /share`
    pub async fn list_shareable_assets(
        &self,
        filter: Option<&ShareFilter>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<ShareableAsset>, TransportError> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            filter.append_query(&mut query);
        }
        page_params(&mut query, cursor, limit);
        self.client.get("/share", &query).await
    }

    /// `PATCH /share/{shareable_asset_id}`
    pub async fn update_shareable_asset(
        &self,
        shareable_asset_id: &str,
        request: &UpdateShareableAsset,
    ) -> Result<ShareableAsset, TransportError> {
        self.client
            .patch(&format!("/share/{shareable_asset_id}"), request)
            .await
    }

    /// `DELETE /share/{shareable_asset_id}`
    pub async fn delete_shareable_asset(
        &self,
        shareable_asset_id: &str,
    ) -> Result<DeleteResponse, TransportError> {
        self.client
            .delete(&format!("/share/{shareable_asset_id}"))
            .await
    }
}
