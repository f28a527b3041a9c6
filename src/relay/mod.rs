pub mod embed;
pub mod pipeline;
pub mod webhook;

use async_trait::async_trait;

use crate::models::WebhookPayload;

#[derive(Debug)]
pub struct SinkError {
    pub message: String,
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for SinkError {
    fn from(s: String) -> Self {
        SinkError { message: s }
    }
}

impl From<&str> for SinkError {
    fn from(s: &str) -> Self {
        SinkError {
            message: s.to_string(),
        }
    }
}

/// Destination for outgoing notifications. One call per accepted submission.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, url: &str, payload: &WebhookPayload) -> Result<(), SinkError>;
}
