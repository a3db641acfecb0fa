//! Mock inference backend for integration tests
//!
//! Serves the three provider endpoints with canned responses and
//! records every JSON body it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Canned text generation body, expected to reach callers untouched
pub const TEXT_BODY: &str = r#"[{"generated_text":"Likely a viral infection; consult a general practitioner."}]"#;

/// Canned multimodal body
pub const MULTIMODAL_BODY: &str = r#"{"generated_text":"A chest X-ray with no visible abnormalities."}"#;

/// Canned binary payload (PNG magic bytes plus filler)
pub const PNG_BODY: &[u8] = b"\x89PNG\r\n\x1a\nmock-image-payload";

/// A running mock provider
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    /// When set, every endpoint answers with this status instead of a
    /// success body
    fail_status: Option<u16>,
    /// JSON bodies received, tagged with their endpoint path
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockProvider {
    /// Start a mock that always succeeds
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock whose endpoints all answer with the given status
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Some(status)).await
    }

    async fn start_inner(fail_status: Option<u16>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            fail_status,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/models/text", routing::post(handle_text))
            .route("/models/image", routing::post(handle_image))
            .route("/models/multimodal", routing::post(handle_multimodal))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Full URL for one of the mock endpoints
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Last JSON body received on the given endpoint
    pub fn last_request(&self, path: &str) -> Option<Value> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }

    /// Total number of requests received across all endpoints
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn record(state: &MockState, path: &str, body: Value) {
    state.requests.lock().unwrap().push((path.to_string(), body));
}

fn failure(status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, "upstream unavailable").into_response()
}

async fn handle_text(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    record(&state, "/models/text", body);

    if let Some(status) = state.fail_status {
        return failure(status);
    }

    ([(header::CONTENT_TYPE, "application/json")], TEXT_BODY).into_response()
}

async fn handle_image(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    record(&state, "/models/image", body);

    if let Some(status) = state.fail_status {
        return failure(status);
    }

    ([(header::CONTENT_TYPE, "image/png")], PNG_BODY).into_response()
}

async fn handle_multimodal(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    record(&state, "/models/multimodal", body);

    if let Some(status) = state.fail_status {
        return failure(status);
    }

    ([(header::CONTENT_TYPE, "application/json")], MULTIMODAL_BODY).into_response()
}
