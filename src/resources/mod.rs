//! Resource facades: the hand-curated surface of the SDK.
//!
//! Each facade wraps one operation client, adapts loose filter mappings into
//! typed models, and normalizes transport failures into
//! [`CloudGlueError`](crate::CloudGlueError). Facades never retry and never
//! log; retry policy lives in the operation layer.

use std::future::Future;

use tokio::time::Instant;

use crate::errors::{CloudGlueError, Result};

mod chat;
mod collections;
mod describe;
mod extract;
mod files;
mod responses;
mod share;
mod transcribe;

pub use chat::{Chat, Completions};
pub use collections::Collections;
pub use describe::Describe;
pub use extract::Extract;
pub use files::Files;
pub use responses::Responses;
pub use share::Share;
pub use transcribe::Transcribe;

/// Polling config for the `wait_*` and `run` helpers.
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Delay between status checks. Default: 5s.
    pub poll_interval: std::time::Duration,
    /// Total time to wait before giving up. Default: 10 minutes.
    pub timeout: std::time::Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: std::time::Duration::from_secs(5),
            timeout: std::time::Duration::from_secs(600),
        }
    }
}

/// Poll `fetch` until `is_terminal` returns true or the deadline passes.
///
/// The terminal value is returned as-is, including failed states; only the
/// deadline produces [`CloudGlueError::Timeout`].
pub(crate) async fn poll_until<T, F, Fut>(
    options: &WaitOptions,
    mut fetch: F,
    is_terminal: impl Fn(&T) -> bool,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let deadline = Instant::now() + options.timeout;

    loop {
        let current = fetch().await?;

        if is_terminal(&current) {
            return Ok(current);
        }

        if Instant::now() >= deadline {
            return Err(CloudGlueError::Timeout(options.timeout));
        }

        tokio::time::sleep(options.poll_interval).await;
    }
}
