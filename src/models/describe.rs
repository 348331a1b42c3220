use serde::{Deserialize, Serialize};

use crate::models::DescribeConfig;

/// Request body for `describe.create`.
#[derive(Debug, Clone, Serialize)]
pub struct NewDescribe {
    /// `cloudglue://`, `http(s)://`, or YouTube URL.
    pub url: String,
    #[serde(flatten)]
    pub config: DescribeConfig,
}

/// A description job. Check `status` or use the `is_*` helpers; `data` is
/// populated once the job completes.
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeJob {
    pub job_id: String,
    /// "pending", "processing", "completed", or "failed".
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub data: Option<Description>,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl DescribeJob {
    /// Terminal = won't change anymore ("completed" or "failed").
    pub fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), "completed" | "failed")
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    /// Status is "failed".
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }
}

/// Description document for one video: a summary plus per-segment docs.
#[derive(Debug, Clone, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub segment_docs: Vec<SegmentDoc>,
}

/// One time-bounded slice of a video description.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentDoc {
    /// Seconds from video start.
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    /// Transcribed speech within the segment.
    #[serde(default)]
    pub speech: Option<String>,
    /// On-screen text detected within the segment.
    #[serde(default)]
    pub scene_text: Option<String>,
    #[serde(default)]
    pub visual_scene_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_describe_flattens_config_onto_the_body() {
        let request = NewDescribe {
            url: "cloudglue://files/f-1".to_string(),
            config: DescribeConfig {
                enable_speech: true,
                enable_scene_text: false,
                enable_visual_scene_description: true,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "cloudglue://files/f-1",
                "enable_speech": true,
                "enable_scene_text": false,
                "enable_visual_scene_description": true,
            })
        );
    }

    #[test]
    fn completed_job_carries_description_data() {
        let job: DescribeJob = serde_json::from_value(json!({
            "job_id": "j-1",
            "status": "completed",
            "data": {
                "title": "Sprint review",
                "summary": "The team walks through the release.",
                "segment_docs": [
                    {"start_time": 0.0, "end_time": 30.0, "speech": "welcome everyone"}
                ],
            },
        }))
        .unwrap();

        assert!(job.is_terminal());
        assert!(job.is_completed());
        let data = job.data.unwrap();
        assert_eq!(data.title.as_deref(), Some("Sprint review"));
        assert_eq!(data.segment_docs.len(), 1);
        assert_eq!(data.segment_docs[0].speech.as_deref(), Some("welcome everyone"));
    }

    #[test]
    fn pending_job_is_not_terminal() {
        let job: DescribeJob =
            serde_json::from_value(json!({"job_id": "j-2", "status": "pending"})).unwrap();
        assert!(!job.is_terminal());
        assert!(!job.is_failed());
        assert!(job.data.is_none());
    }
}
