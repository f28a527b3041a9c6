#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode as AxumStatus;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use feedback_relay::config::{Branding, Config, DEFAULT_FOOTER_TEXT};
use feedback_relay::models::WebhookPayload;
use feedback_relay::relay::{NotificationSink, SinkError};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Submit JSON to the handler, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with a JSON content type, return (body, status).
    pub async fn submit_raw(&self, raw: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .header("content-type", "application/json")
            .body(raw.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Post the page form, return the rendered HTML and status.
    pub async fn submit_page(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/"))
            .form(data)
            .send()
            .await
            .expect("submit page failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

/// Capturing stand-in for the chat webhook.
pub struct MockSink {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockSink {
    pub fn url(&self) -> String {
        format!("http://{}/webhook", self.addr)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockSinkState {
    received: Arc<Mutex<Vec<Value>>>,
    status: AxumStatus,
}

async fn capture(State(state): State<MockSinkState>, Json(body): Json<Value>) -> AxumStatus {
    state.received.lock().unwrap().push(body);
    state.status
}

/// Spawn a mock sink answering every delivery with `status`.
pub async fn spawn_sink(status: u16) -> MockSink {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockSinkState {
        received: received.clone(),
        status: AxumStatus::from_u16(status).unwrap(),
    };
    let app = Router::new()
        .route("/webhook", post(capture))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock sink");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock sink failed");
    });

    MockSink { addr, received }
}

/// Sink that never reaches the network.
#[derive(Default)]
pub struct RecordingSink {
    pub payloads: Mutex<Vec<(String, WebhookPayload)>>,
    pub fail: bool,
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(&self, url: &str, payload: &WebhookPayload) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::from("connection reset"));
        }
        self.payloads
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        Ok(())
    }
}

pub fn test_config(webhook_url: Option<String>) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        base_url: "http://localhost:0".to_string(),
        webhook_url,
        max_body_size: 1_048_576,
        footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        branding: Branding::default(),
        log_level: "warn".to_string(),
    }
}

/// Spawn the app with the real webhook sink pointed at `webhook_url`.
pub async fn spawn_app(webhook_url: Option<String>) -> TestApp {
    serve(feedback_relay::build_app(test_config(webhook_url))).await
}

/// Spawn the app with a custom configuration and the real webhook sink.
pub async fn spawn_app_with_config(config: Config) -> TestApp {
    serve(feedback_relay::build_app(config)).await
}

/// Spawn the app with a custom sink.
pub async fn spawn_app_with_sink(
    webhook_url: Option<String>,
    sink: Arc<dyn NotificationSink>,
) -> TestApp {
    serve(feedback_relay::build_app_with_sink(test_config(webhook_url), sink)).await
}

async fn serve(app: Router) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// An address nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/webhook")
}
