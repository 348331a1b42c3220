use serde_json::Value;

use crate::api::DescribeApi;
use crate::errors::Result;
use crate::models::{DescribeConfig, DescribeJob, NewDescribe};
use crate::resources::{poll_until, WaitOptions};

/// Rich multimodal descriptions of videos.
#[derive(Debug, Clone)]
pub struct Describe {
    api: DescribeApi,
}

impl Describe {
    pub(crate) fn new(api: DescribeApi) -> Self {
        Self { api }
    }

    /// Start a description job and return immediately.
    ///
    /// `config` is a plain mapping; see [`DescribeConfig::from_value`] for
    /// the recognized keys. Absent keys keep their defaults (everything
    /// enabled).
    pub async fn create(&self, url: &str, config: Option<&Value>) -> Result<DescribeJob> {
        let config = config
            .map(DescribeConfig::from_value)
            .transpose()?
            .unwrap_or_default();

        let request = NewDescribe {
            url: url.to_string(),
            config,
        };
        Ok(self.api.create_describe(&request).await?)
    }

    /// Fetch a description job by its identifier.
    pub async fn get(&self, job_id: &str) -> Result<DescribeJob> {
        Ok(self.api.get_describe(job_id).await?)
    }

    /// Start a description job and poll until it reaches a terminal status.
    ///
    /// Returns the job in its terminal state, including "failed"; only the
    /// deadline produces [`CloudGlueError::Timeout`](crate::CloudGlueError::Timeout).
    pub async fn run(
        &self,
        url: &str,
        config: Option<&Value>,
        options: Option<WaitOptions>,
    ) -> Result<DescribeJob> {
        let job = self.create(url, config).await?;
        let options = options.unwrap_or_default();
        poll_until(&options, || self.get(&job.job_id), DescribeJob::is_terminal).await
    }
}
