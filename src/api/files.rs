use std::sync::Arc;

use crate::api::{page_params, ApiClient, TransportError};
use crate::models::{DeleteResponse, FileFilter, FileObject, Page};

/// Operation client for the `/files` endpoints.
#[derive(Debug, Clone)]
pub struct FilesApi {
    client: Arc<ApiClient>,
}

impl FilesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /files` (multipart form upload)
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        metadata: Option<&serde_json::Value>,
    ) -> Result<FileObject, TransportError> {
        self.client
            .post_multipart("/files", file_name, bytes, metadata)
            .await
    }

    /// `GET /files/{file_id}`
    pub async fn get_file(&self, file_id: &str) -> Result<FileObject, TransportError> {
        self.client.get(&format!("/files/{file_id}"), &[]).await
    }

    /// `GET /files`
    pub async fn list_files(
        &self,
        filter: Option<&FileFilter>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<FileObject>, TransportError> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            filter.append_query(&mut query);
        }
        page_params(&mut query, cursor, limit);
        self.client.get("/files", &query).await
    }

    /// `DELETE /files/{file_id}`
    pub async fn delete_file(&self, file_id: &str) -> Result<DeleteResponse, TransportError> {
        self.client.delete(&format!("/files/{file_id}")).await
    }
}
