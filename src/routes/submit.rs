use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::relay::pipeline;
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    // Oversized or unreadable bodies share the generic failure reply.
    let body = body.map_err(|e| AppError::ForwardingFailure(format!("Unreadable body: {e}")))?;

    pipeline::run(&state, &body).await?;
    Ok(Json(json!({ "success": true })))
}
