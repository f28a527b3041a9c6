use async_trait::async_trait;

use super::{SubmissionApi, SubmitError};
use crate::models::Submission;

/// Talks to `POST /api/submit` on a running server.
pub struct HttpSubmissionApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/submit", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl SubmissionApi for HttpSubmissionApi {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Feedback submission failed: {e}");
                SubmitError::Transport(e.to_string())
            })?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(resp.status()))
        }
    }
}
