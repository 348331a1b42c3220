//! Request and response models for the CloudGlue API.

use serde::Deserialize;

mod chat;
mod collections;
mod describe;
mod extract;
mod files;
mod filters;
mod responses;
mod share;
mod transcribe;

pub use chat::{
    ChatChoice, ChatCompletion, ChatCompletionRequest, ChatMessage, Citation, Usage, DEFAULT_MODEL,
};
pub use collections::{
    AddCollectionFile, AddYouTubeCollectionFile, Collection, CollectionFile, Entities,
    NewCollection,
};
pub use describe::{DescribeJob, Description, NewDescribe, SegmentDoc};
pub use extract::{ExtractJob, NewExtract};
pub use files::{FileObject, VideoInfo};
pub use filters::{
    ChatCompletionFilter, CollectionFilter, DescribeConfig, ExtractConfig, FileFilter,
    FilterCondition, ResponseFilter, ShareFilter, VideoFilter,
};
pub use responses::{NewResponse, ResponseObject};
pub use share::{NewShareableAsset, ShareableAsset, UpdateShareableAsset};
pub use transcribe::{NewTranscribe, TranscribeJob};

/// One page of results from a list operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Total number of matching items, when the server reports it.
    #[serde(default)]
    pub total: Option<u64>,
    /// Pass to the list call for the next page. `None` means no more results.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// `true` if `next_cursor` is `Some`.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Confirmation returned by delete operations.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    /// Identifier of the deleted resource, when echoed back.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}
