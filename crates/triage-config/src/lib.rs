#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod relay;
pub mod server;

use serde::Deserialize;

pub use relay::{ImageEndpointConfig, MultimodalEndpointConfig, RelayConfig, TextEndpointConfig};
pub use server::{HealthConfig, ServerConfig, StaticAssetsConfig};

/// Top-level Triage configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Relay endpoint configuration
    #[serde(default)]
    pub relay: RelayConfig,
}
