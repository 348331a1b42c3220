use std::sync::Arc;

use crate::api::{ApiClient, TransportError};
use crate::models::{ChatCompletion, ChatCompletionRequest};

/// Operation client for the `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Arc<ApiClient>,
}

impl ChatApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /chat/completions`
    pub async fn create_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, TransportError> {
        self.client.post("/chat/completions", request).await
    }
}
