use serde_json::Value;

use crate::api::ExtractApi;
use crate::errors::{CloudGlueError, Result};
use crate::models::{ExtractJob, NewExtract};
use crate::resources::{poll_until, WaitOptions};

/// Structured entity extraction from videos.
#[derive(Debug, Clone)]
pub struct Extract {
    api: ExtractApi,
}

impl Extract {
    pub(crate) fn new(api: ExtractApi) -> Self {
        Self { api }
    }

    /// Start an extraction job and return immediately.
    ///
    /// At least one of `prompt` or `schema` is required; passing neither
    /// fails with a configuration error before any network call.
    pub async fn create(
        &self,
        url: &str,
        prompt: Option<&str>,
        schema: Option<&Value>,
    ) -> Result<ExtractJob> {
        if prompt.is_none() && schema.is_none() {
            return Err(CloudGlueError::configuration(
                "extract requires a prompt, a schema, or both",
            ));
        }

        let request = NewExtract {
            url: url.to_string(),
            prompt: prompt.map(str::to_string),
            schema: schema.cloned(),
        };
        Ok(self.api.create_extract(&request).await?)
    }

    /// Fetch an extraction job by its identifier.
    pub async fn get(&self, job_id: &str) -> Result<ExtractJob> {
        Ok(self.api.get_extract(job_id).await?)
    }

    /// Start an extraction job and poll until it reaches a terminal status.
    ///
    /// Returns the job in its terminal state, including "failed"; only the
    /// deadline produces [`CloudGlueError::Timeout`].
    pub async fn run(
        &self,
        url: &str,
        prompt: Option<&str>,
        schema: Option<&Value>,
        options: Option<WaitOptions>,
    ) -> Result<ExtractJob> {
        let job = self.create(url, prompt, schema).await?;
        let options = options.unwrap_or_default();
        poll_until(&options, || self.get(&job.job_id), ExtractJob::is_terminal).await
    }
}
