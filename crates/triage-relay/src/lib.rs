#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    routing::post,
};

pub use error::{RelayError, Result};
pub use server::Relay;
pub use types::{GenerationRequest, Mode, Relayed};

use request::ExtractGeneration;

/// Body limit for image uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Build the relay from configuration
pub fn build_relay(config: &triage_config::Config) -> Arc<Relay> {
    Arc::new(Relay::from_config(&config.relay))
}

/// Create the endpoint router for generation requests
///
/// Non-POST methods fall through to an explicit handler so the 405
/// still carries the error envelope.
pub fn endpoint_router() -> Router<Arc<Relay>> {
    Router::new()
        .route("/api/generate", post(generate).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}

/// Handle generation requests
async fn generate(
    State(relay): State<Arc<Relay>>,
    ExtractGeneration(request): ExtractGeneration,
) -> Result<Relayed> {
    tracing::debug!(mode = %request.mode, "generation handler called");

    let reply = relay.handle(request).await?;

    tracing::debug!("generation complete");

    Ok(reply)
}

async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
