use chrono::Utc;
use serde_json::Value;

use super::embed::{self, Accepted};
use crate::error::AppError;
use crate::models::{Submission, WebhookPayload};
use crate::state::AppState;

/// Parse a raw request body and relay it.
pub async fn run(state: &AppState, body: &[u8]) -> Result<(), AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::ForwardingFailure(format!("Invalid JSON body: {e}")))?;

    let submission: Submission = match value {
        Value::Null => {
            return Err(AppError::ForwardingFailure("JSON body is null".to_string()));
        }
        // Arrays and scalars carry no named fields.
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::ForwardingFailure(format!("Invalid submission: {e}")))?,
        _ => return Err(AppError::MissingFields),
    };

    relay(state, &submission).await
}

/// Validate a submission, build its notification and forward it to the sink.
pub async fn relay(state: &AppState, submission: &Submission) -> Result<(), AppError> {
    let (kind, content) = submission
        .required_fields()
        .ok_or(AppError::MissingFields)?;

    // Read on every call so a missing URL is reported per request.
    let url = state
        .config
        .webhook_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or(AppError::MissingConfiguration)?;

    let accepted = Accepted {
        kind,
        content,
        name: submission.name(),
        email: submission.email(),
    };
    let payload = WebhookPayload {
        embeds: vec![embed::build(&accepted, &state.config.footer_text, Utc::now())],
    };

    state
        .sink
        .deliver(url, &payload)
        .await
        .map_err(|e| AppError::ForwardingFailure(e.to_string()))?;

    tracing::info!(kind, "Feedback relayed");
    Ok(())
}
