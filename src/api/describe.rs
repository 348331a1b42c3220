use std::sync::Arc;

use crate::api::{ApiClient, TransportError};
use crate::models::{DescribeJob, NewDescribe};

/// Operation client for the `/describe` endpoints.
#[derive(Debug, Clone)]
pub struct DescribeApi {
    client: Arc<ApiClient>,
}

impl DescribeApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /describe`
    pub async fn create_describe(
        &self,
        request: &NewDescribe,
    ) -> Result<DescribeJob, TransportError> {
        self.client.post("/describe", request).await
    }

    /// `GET /describe/{job_id}`
    pub async fn get_describe(&self, job_id: &str) -> Result<DescribeJob, TransportError> {
        self.client.get(&format!("/describe/{job_id}"), &[]).await
    }
}
