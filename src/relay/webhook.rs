use async_trait::async_trait;

use super::{NotificationSink, SinkError};
use crate::models::WebhookPayload;

/// Posts notifications to a chat webhook over HTTP.
pub struct WebhookSink {
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for WebhookSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn deliver(&self, url: &str, payload: &WebhookPayload) -> Result<(), SinkError> {
        let resp = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SinkError::from(format!("Webhook request failed: {e}")))?;

        // The sink's verdict is not part of the contract; only transport errors fail.
        tracing::debug!(status = resp.status().as_u16(), "Webhook delivered");
        Ok(())
    }
}
