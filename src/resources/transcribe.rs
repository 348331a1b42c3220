use crate::api::TranscribeApi;
use crate::errors::Result;
use crate::models::{NewTranscribe, TranscribeJob};
use crate::resources::{poll_until, WaitOptions};

/// Speech-to-text transcription of videos.
#[derive(Debug, Clone)]
pub struct Transcribe {
    api: TranscribeApi,
}

impl Transcribe {
    pub(crate) fn new(api: TranscribeApi) -> Self {
        Self { api }
    }

    /// Start a transcription job and return immediately.
    pub async fn create(&self, url: &str) -> Result<TranscribeJob> {
        let request = NewTranscribe {
            url: url.to_string(),
        };
        Ok(self.api.create_transcribe(&request).await?)
    }

    /// Fetch a transcription job by its identifier.
    pub async fn get(&self, job_id: &str) -> Result<TranscribeJob> {
        Ok(self.api.get_transcribe(job_id).await?)
    }

    /// Start a transcription job and poll until it reaches a terminal status.
    ///
    /// Returns the job in its terminal state, including "failed"; only the
    /// deadline produces [`CloudGlueError::Timeout`](crate::CloudGlueError::Timeout).
    pub async fn run(&self, url: &str, options: Option<WaitOptions>) -> Result<TranscribeJob> {
        let job = self.create(url).await?;
        let options = options.unwrap_or_default();
        poll_until(
            &options,
            || self.get(&job.job_id),
            TranscribeJob::is_terminal,
        )
        .await
    }
}
