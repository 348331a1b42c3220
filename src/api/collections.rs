use std::sync::Arc;

use crate::api::{page_params, ApiClient, TransportError};
use crate::models::{
    AddCollectionFile, AddYouTubeCollectionFile, Collection, CollectionFile, CollectionFilter,
    DeleteResponse, Description, Entities, NewCollection, Page, VideoFilter,
};

/// Operation client for the `/collections` endpoints, including the
/// per-collection video subresources.
#[derive(Debug, Clone)]
pub struct CollectionsApi {
    client: Arc<ApiClient>,
}

impl CollectionsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /collections`
    pub async fn create_collection(
        &self,
        request: &NewCollection,
    ) -> Result<Collection, TransportError> {
        self.client.post("/collections", request).await
    }

    /// `GET /collections/{collection_id}`
    pub async fn get_collection(&self, collection_id: &str) -> Result<Collection, TransportError> {
        self.client
            .get(&format!("/collections/{collection_id}"), &[])
            .await
    }

    /// `GET /collections`
    pub async fn list_collections(
        &self,
        filter: Option<&CollectionFilter>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<Collection>, TransportError> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            filter.append_query(&mut query);
        }
        page_params(&mut query, cursor, limit);
        self.client.get("/collections", &query).await
    }

    /// `DELETE /collections/{collection_id}`
    pub async fn delete_collection(
        &self,
        collection_id: &str,
    ) -> Result<DeleteResponse, TransportError> {
        self.client
            .delete(&format!("/collections/{collection_id}"))
            .await
    }

    /// `POST /collections/{collection_id}/videos`
    pub async fn add_video(
        &self,
        collection_id: &str,
        request: &AddCollectionFile,
    ) -> Result<CollectionFile, TransportError> {
        self.client
            .post(&format!("/collections/{collection_id}/videos"), request)
            .await
    }

    /// `POST /collections/{collection_id}/videos/youtube`
    pub async fn add_youtube_video(
        &self,
        collection_id: &str,
        request: &AddYouTubeCollectionFile,
    ) -> Result<CollectionFile, TransportError> {
        self.client
            .post(
                &format!("/collections/{collection_id}/videos/youtube"),
                request,
            )
            .await
    }

    /// `GET /collections/{collection_id}/videos/{file_id}`
    pub async fn get_video(
        &self,
        collection_id: &str,
        file_id: &str,
    ) -> Result<CollectionFile, TransportError> {
        self.client
            .get(
                &format!("/collections/{collection_id}/videos/{file_id}"),
                &[],
            )
            .await
    }

    /// `GET /collections/{collection_id}/videos`
    pub async fn list_videos(
        &self,
        collection_id: &str,
        filter: Option<&VideoFilter>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<CollectionFile>, TransportError> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            filter.append_query(&mut query);
        }
        page_params(&mut query, cursor, limit);
        self.client
            .get(&format!("/collections/{collection_id}/videos"), &query)
            .await
    }

    /// `DELETE /collections/{collection_id}/videos/{file_id}`
    pub async fn remove_video(
        &self,
        collection_id: &str,
        file_id: &str,
    ) -> Result<DeleteResponse, TransportError> {
        self.client
            .delete(&format!("/collections/{collection_id}/videos/{file_id}"))
            .await
    }

    /// `GET /collections/{collection_id}/videos/{file_id}/description`
    ///
    /// `limit` and `offset` window the segment documents of the description,
    /// not a list of resources.
    pub async fn get_video_description(
        &self,
        collection_id: &str,
        file_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Description, TransportError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        self.client
            .get(
                &format!("/collections/{collection_id}/videos/{file_id}/description"),
                &query,
            )
            .await
    }

    /// `GET /collections/{collection_id}/videos/{file_id}/entities`
    pub async fn get_video_entities(
        &self,
        collection_id: &str,
        file_id: &str,
    ) -> Result<Entities, TransportError> {
        self.client
            .get(
                &format!("/collections/{collection_id}/videos/{file_id}/entities"),
                &[],
            )
            .await
    }
}
