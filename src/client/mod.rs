pub mod form;
pub mod http;
pub mod local;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::models::Submission;

pub use form::{FeedbackForm, FormField, FormStatus, DETAILS_REQUIRED};
pub use http::HttpSubmissionApi;
pub use local::LocalSubmissionApi;

/// Why a submission attempt failed. The form shows every variant the same way.
#[derive(Debug)]
pub enum SubmitError {
    Rejected(StatusCode),
    Transport(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Rejected(status) => write!(f, "Submission rejected with {status}"),
            SubmitError::Transport(msg) => write!(f, "Submission transport error: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Carries one submission to the handler.
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}
