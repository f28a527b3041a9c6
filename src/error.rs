use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    MissingFields,
    MissingConfiguration,
    /// Carries the operator-facing cause. Callers only ever see a generic message.
    ForwardingFailure(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::MissingConfiguration | AppError::ForwardingFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingFields => "Missing required fields",
            AppError::MissingConfiguration => "Webhook URL is missing",
            AppError::ForwardingFailure(_) => "Failed to send",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingFields => write!(f, "Missing required fields"),
            AppError::MissingConfiguration => write!(f, "Webhook URL is missing"),
            AppError::ForwardingFailure(cause) => write!(f, "Forwarding failed: {cause}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingFields => {}
            AppError::MissingConfiguration => {
                tracing::error!("WEBHOOK_URL is not configured");
            }
            AppError::ForwardingFailure(cause) => {
                tracing::error!("Webhook error: {cause}");
            }
        }

        let body = json!({ "error": self.public_message() });
        (self.status(), axum::Json(body)).into_response()
    }
}
