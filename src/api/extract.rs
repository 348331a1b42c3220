use std::sync::Arc;

use crate::api::{ApiClient, TransportError};
use crate::models::{ExtractJob, NewExtract};

/// Operation client for the `/extract` endpoints.
#[derive(Debug, Clone)]
pub struct ExtractApi {
    client: Arc<ApiClient>,
}

impl ExtractApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /extract`
    pub async fn create_extract(&self, request: &NewExtract) -> Result<ExtractJob, TransportError> {
        self.client.post("/extract", request).await
    }

    /// `GET /extract/{job_id}`
    pub async fn get_extract(&self, job_id: &str) -> Result<ExtractJob, TransportError> {
        self.client.get(&format!("/extract/{job_id}"), &[]).await
    }
}
