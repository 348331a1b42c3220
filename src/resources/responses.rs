use serde_json::Value;

use crate::api::ResponsesApi;
use crate::errors::Result;
use crate::models::{DeleteResponse, NewResponse, Page, ResponseFilter, ResponseObject};

/// Long-form model responses, including background execution.
#[derive(Debug, Clone)]
pub struct Responses {
    api: ResponsesApi,
}

impl Responses {
    pub(crate) fn new(api: ResponsesApi) -> Self {
        Self { api }
    }

    /// Create a response. With
    /// [`with_background(true)`](NewResponse::with_background) the call
    /// returns an "in_progress" object to poll via [`get`](Self::get).
    pub async fn create(&self, request: NewResponse) -> Result<ResponseObject> {
        Ok(self.api.create_response(&request).await?)
    }

    /// Fetch a response by its identifier.
    pub async fn get(&self, response_id: &str) -> Result<ResponseObject> {
        Ok(self.api.get_response(response_id).await?)
    }

    /// List responses.
    ///
    /// `filter` is a plain mapping; recognized keys: `status`,
    /// `created_before`, `created_after`.
    pub async fn list(
        &self,
        filter: Option<&Value>,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<ResponseObject>> {
        let filter = filter.map(ResponseFilter::from_value).transpose()?;
        Ok(self
            .api
            .list_responses(filter.as_ref(), cursor, limit)
            .await?)
    }

    /// Delete a response.
    pub async fn delete(&self, response_id: &str) -> Result<DeleteResponse> {
        Ok(self.api.delete_response(response_id).await?)
    }

    /// Cancel an in-progress background response.
    pub async fn cancel(&self, response_id: &str) -> Result<ResponseObject> {
        Ok(self.api.cancel_response(response_id).await?)
    }
}
