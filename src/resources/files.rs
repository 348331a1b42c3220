use std::path::Path;

use serde_json::Value;

use crate::api::FilesApi;
use crate::errors::Result;
use crate::models::{DeleteResponse, FileFilter, FileObject, Page};
use crate::resources::{poll_until, WaitOptions};

/// File upload and management.
#[derive(Debug, Clone)]
pub struct Files {
    api: FilesApi,
}

impl Files {
    pub(crate) fn new(api: FilesApi) -> Self {
        Self { api }
    }

    /// Upload a local video file, with optional JSON metadata attached.
    ///
    /// The returned file is typically still "processing"; use
    /// [`wait_until_ready`](Self::wait_until_ready) to block until it reaches
    /// a terminal status.
    ///
    /// # Errors
    ///
    /// - [`CloudGlueError::Io`](crate::CloudGlueError::Io) if the file cannot
    ///   be read.
    pub async fn upload(
        &self,
        path: impl AsRef<Path>,
        metadata: Option<&Value>,
    ) -> Result<FileObject> {
        let path = path.as_ref();

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video.mp4".to_string());

        let bytes = tokio::fs::read(path).await?;

        Ok(self.api.upload_file(&file_name, bytes, metadata).await?)
    }

    /// Fetch a file by its identifier.
    pub async fn get(&self, file_id: &str) -> Result<FileObject> {
        Ok(self.api.get_file(file_id).await?)
    }

    /// List files.
    ///
    /// `filter` is a plain mapping; recognized keys: `status`, `order`,
    /// `sort`. Pass [`Page::next_cursor`] back as `cursor` for the next page.
    pub async fn list(
        &self,
        filter: Option<&Value>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<FileObject>> {
        let filter = filter.map(FileFilter::from_value).transpose()?;
        Ok(self.api.list_files(filter.as_ref(), cursor, limit).await?)
    }

    /// Delete a file.
    pub async fn delete(&self, file_id: &str) -> Result<DeleteResponse> {
        Ok(self.api.delete_file(file_id).await?)
    }

    /// Poll until the file reaches a terminal status.
    ///
    /// Returns the file in its terminal state, including "failed"; only the
    /// deadline produces [`CloudGlueError::Timeout`](crate::CloudGlueError::Timeout).
    pub async fn wait_until_ready(
        &self,
        file_id: &str,
        options: Option<WaitOptions>,
    ) -> Result<FileObject> {
        let options = options.unwrap_or_default();
        poll_until(&options, || self.get(file_id), FileObject::is_terminal).await
    }
}
