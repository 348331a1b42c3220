//! # CloudGlue SDK for Rust
//!
//! Official Rust client for the [CloudGlue](https://cloudglue.dev) video
//! intelligence API. Upload videos, organize them into collections, run
//! extraction, description, and transcription jobs, and chat with your video
//! content -- all with idiomatic async Rust.
//!
//! ## Quick start
//!
//! ```no_run
//! use cloudglue::{ChatCompletionRequest, ChatMessage, Client};
//!
//! #[tokio::main]
//! async fn main() -> cloudglue::Result<()> {
//!     let client = Client::new("your-api-key");
//!
//!     // Upload a video and wait until it is ready
//!     let file = client.files.upload("meeting.mp4", None).await?;
//!     let file = client.files.wait_until_ready(&file.id, None).await?;
//!
//!     // Put it in a collection so chat can search it
//!     let collection = client
//!         .collections
//!         .create("meetings", Some("Weekly sync recordings"), None, None)
//!         .await?;
//!     client.collections.add_video(&collection.id, &file.id).await?;
//!     client
//!         .collections
//!         .wait_for_video(&collection.id, &file.id, None)
//!         .await?;
//!
//!     // Ask questions grounded in the collection
//!     let request = ChatCompletionRequest::new(vec![ChatMessage::user(
//!         "What decisions were made in this meeting?",
//!     )])
//!     .with_collections(vec![collection.id.clone()])
//!     .with_include_citations(true);
//!
//!     let completion = client.chat.completions.create(request).await?;
//!     println!("{}", completion.content().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use cloudglue::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> cloudglue::Result<()> {
//! let client = ClientBuilder::new()
//!     .api_key("your-api-key")
//!     .base_url("https://api.cloudglue.dev/v1")
//!     .max_retries(5)
//!     .timeout(Duration::from_secs(120))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! With no explicit key, [`ClientBuilder::build`] falls back to the
//! `CLOUDGLUE_API_KEY` environment variable.
//!
//! ## Errors
//!
//! Every operation returns [`Result`]. Failed API calls surface as
//! [`CloudGlueError::Api`] carrying the status code, parsed response body,
//! headers, and reason phrase the server sent; client-side problems (missing
//! key, unrecognized filter keys) surface as
//! [`CloudGlueError::Configuration`] before any request is made.

pub mod api;
mod client;
mod errors;
pub mod models;
mod resources;

pub use client::{Client, ClientBuilder};
pub use errors::{ApiError, CloudGlueError, Result};
pub use models::{
    ChatChoice, ChatCompletion, ChatCompletionFilter, ChatCompletionRequest, ChatMessage,
    Citation, Collection, CollectionFile, DeleteResponse, DescribeConfig, DescribeJob,
    Description, Entities, ExtractConfig, ExtractJob, FileObject, FilterCondition, NewResponse,
    Page, ResponseObject, SegmentDoc, ShareableAsset, TranscribeJob, Usage, VideoInfo,
    DEFAULT_MODEL,
};
pub use resources::{
    Chat, Collections, Completions, Describe, Extract, Files, Responses, Share, Transcribe,
    WaitOptions,
};
