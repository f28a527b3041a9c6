use async_trait::async_trait;

use super::{SubmissionApi, SubmitError};
use crate::error::AppError;
use crate::models::Submission;
use crate::relay::pipeline;
use crate::state::SharedState;

/// Runs the handler pipeline in-process. Backs the server-rendered page.
pub struct LocalSubmissionApi {
    state: SharedState,
}

impl LocalSubmissionApi {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl SubmissionApi for LocalSubmissionApi {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        pipeline::relay(&self.state, submission)
            .await
            .map_err(|e| {
                if !matches!(e, AppError::MissingFields) {
                    tracing::error!("Relay failed: {e}");
                }
                SubmitError::Rejected(e.status())
            })
    }
}
