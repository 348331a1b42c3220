use serde_json::Value;

use crate::api::CollectionsApi;
use crate::errors::Result;
use crate::models::{
    AddCollectionFile, AddYouTubeCollectionFile, Collection, CollectionFile, CollectionFilter,
    DeleteResponse, DescribeConfig, Description, Entities, ExtractConfig, NewCollection, Page,
    VideoFilter,
};
use crate::resources::{poll_until, WaitOptions};

/// Collection management, including the videos inside each collection.
#[derive(Debug, Clone)]
pub struct Collections {
    api: CollectionsApi,
}

impl Collections {
    pub(crate) fn new(api: CollectionsApi) -> Self {
        Self { api }
    }

    /// Create a collection.
    ///
    /// `describe_config` and `extract_config` are plain mappings; see
    /// [`DescribeConfig::from_value`] and [`ExtractConfig::from_value`] for
    /// the recognized keys.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        describe_config: Option<&Value>,
        extract_config: Option<&Value>,
    ) -> Result<Collection> {
        let describe_config = describe_config.map(DescribeConfig::from_value).transpose()?;
        let extract_config = extract_config.map(ExtractConfig::from_value).transpose()?;

        // TODO: send null once the API stops rejecting absent descriptions.
        let request = NewCollection {
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            describe_config,
            extract_config,
        };
        Ok(self.api.create_collection(&request).await?)
    }

    /// Fetch a collection by its identifier.
    pub async fn get(&self, collection_id: &str) -> Result<Collection> {
        Ok(self.api.get_collection(collection_id).await?)
    }

    /// List collections.
    ///
    /// `filter` is a plain mapping; recognized keys: `name`, `order`, `sort`.
    pub async fn list(
        &self,
        filter: Option<&Value>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<Collection>> {
        let filter = filter.map(CollectionFilter::from_value).transpose()?;
        Ok(self
            .api
            .list_collections(filter.as_ref(), cursor, limit)
            .await?)
    }

    /// Delete a collection. Files added to it are not deleted.
    pub async fn delete(&self, collection_id: &str) -> Result<DeleteResponse> {
        Ok(self.api.delete_collection(collection_id).await?)
    }

    /// Add an already-uploaded file to a collection.
    ///
    /// Processing starts immediately; use
    /// [`wait_for_video`](Self::wait_for_video) to block until it finishes.
    pub async fn add_video(&self, collection_id: &str, file_id: &str) -> Result<CollectionFile> {
        let request = AddCollectionFile {
            file_id: file_id.to_string(),
        };
        Ok(self.api.add_video(collection_id, &request).await?)
    }

    /// Add a YouTube video to a collection by URL.
    pub async fn add_youtube_video(
        &self,
        collection_id: &str,
        url: &str,
        metadata: Option<&Value>,
    ) -> Result<CollectionFile> {
        let request = AddYouTubeCollectionFile {
            url: url.to_string(),
            metadata: metadata.cloned(),
        };
        Ok(self.api.add_youtube_video(collection_id, &request).await?)
    }

    /// Fetch one video's state within a collection.
    pub async fn get_video(&self, collection_id: &str, file_id: &str) -> Result<CollectionFile> {
        Ok(self.api.get_video(collection_id, file_id).await?)
    }

    /// List the videos in a collection.
    ///
    /// `filter` is a plain mapping; recognized keys: `status`, `order`,
    /// `sort`.
    pub async fn list_videos(
        &self,
        collection_id: &str,
        filter: Option<&Value>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<CollectionFile>> {
        let filter = filter.map(VideoFilter::from_value).transpose()?;
        Ok(self
            .api
            .list_videos(collection_id, filter.as_ref(), cursor, limit)
            .await?)
    }

    /// Remove a video from a collection. The underlying file is kept.
    pub async fn remove_video(
        &self,
        collection_id: &str,
        file_id: &str,
    ) -> Result<DeleteResponse> {
        Ok(self.api.remove_video(collection_id, file_id).await?)
    }

    /// Fetch the generated description for a video in a collection.
    ///
    /// `limit` and `offset` window the returned segment documents.
    pub async fn get_video_description(
        &self,
        collection_id: &str,
        file_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Description> {
        Ok(self
            .api
            .get_video_description(collection_id, file_id, limit, offset)
            .await?)
    }

    /// Fetch the extracted entities for a video in a collection.
    pub async fn get_video_entities(
        &self,
        collection_id: &str,
        file_id: &str,
    ) -> Result<Entities> {
        Ok(self.api.get_video_entities(collection_id, file_id).await?)
    }

    /// Poll until a video in a collection reaches a terminal status.
    ///
    /// Returns the video in its terminal state, including "failed"; only the
    /// deadline produces [`CloudGlueError::Timeout`](crate::CloudGlueError::Timeout).
    pub async fn wait_for_video(
        &self,
        collection_id: &str,
        file_id: &str,
        options: Option<WaitOptions>,
    ) -> Result<CollectionFile> {
        let options = options.unwrap_or_default();
        poll_until(
            &options,
            || self.get_video(collection_id, file_id),
            CollectionFile::is_terminal,
        )
        .await
    }
}
