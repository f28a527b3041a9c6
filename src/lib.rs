pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;
pub mod routes;
pub mod state;
pub mod theme;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::relay::webhook::WebhookSink;
use crate::relay::NotificationSink;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    build_app_with_sink(config, Arc::new(WebhookSink::new()))
}

pub fn build_app_with_sink(config: Config, sink: Arc<dyn NotificationSink>) -> Router {
    if config.webhook_url.is_none() {
        tracing::warn!("WEBHOOK_URL is not set; submissions will be rejected until it is");
    }

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        sink,
        theme: theme::activate(),
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
