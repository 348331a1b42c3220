use std::sync::Arc;

use crate::api::{ApiClient, TransportError};
use crate::models::{NewTranscribe, TranscribeJob};

/// Operation client for the `/transcribe` endpoints.
#[derive(Debug, Clone)]
pub struct TranscribeApi {
    client: Arc<ApiClient>,
}

impl TranscribeApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /transcribe`
    pub async fn create_transcribe(
        &self,
        request: &NewTranscribe,
    ) -> Result<TranscribeJob, TransportError> {
        self.client.post("/transcribe", request).await
    }

    /// `GET /transcribe/{job_id}`
    pub async fn get_transcribe(&self, job_id: &str) -> Result<TranscribeJob, TransportError> {
        self.client.get(&format!("/transcribe/{job_id}"), &[]).await
    }
}
