use std::sync::Arc;

use crate::api::{page_params, ApiClient, TransportError};
use crate::models::{DeleteResponse, NewResponse, Page, ResponseFilter, ResponseObject};

/// Operation client for the `/responses` endpoints.
#[derive(Debug, Clone)]
pub struct ResponsesApi {
    client: Arc<ApiClient>,
}

impl ResponsesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /responses`
    pub async fn create_response(
        &self,
        request: &NewResponse,
    ) -> Result<ResponseObject, TransportError> {
        self.client.post("/responses", request).await
    }

    /// `GET /responses/{response_id}`
    pub async fn get_response(&self, response_id: &str) -> Result<ResponseObject, TransportError> {
        self.client
            .get(&format!("/responses/{response_id}"), &[])
            .await
    }

    /// `GET /responses`
    pub async fn list_responses(
        &self,
        filter: Option<&ResponseFilter>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<ResponseObject>, TransportError> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            filter.append_query(&mut query);
        }
        page_params(&mut query, cursor, limit);
        self.client.get("/responses", &query).await
    }

    /// `DELETE /responses/{response_id}`
    pub async fn delete_response(
        &self,
        response_id: &str,
    ) -> Result<DeleteResponse, TransportError> {
        self.client
            .delete(&format!("/responses/{response_id}"))
            .await
    }

    /// `POST /responses/{response_id}/cancel`
    pub async fn cancel_response(
        &self,
        response_id: &str,
    ) -> Result<ResponseObject, TransportError> {
        self.client
            .post_empty(&format!("/responses/{response_id}/cancel"))
            .await
    }
}
