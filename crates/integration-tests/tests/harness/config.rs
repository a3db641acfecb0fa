//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use triage_config::{Config, RelayConfig, ServerConfig, StaticAssetsConfig};

use super::mock_provider::MockProvider;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal defaults: random port, a test API key, static assets
    /// disabled (no UI directory in the test environment)
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    static_assets: StaticAssetsConfig {
                        enabled: false,
                        ..StaticAssetsConfig::default()
                    },
                    ..ServerConfig::default()
                },
                relay: RelayConfig {
                    api_key: Some(SecretString::from("test-key")),
                    ..RelayConfig::default()
                },
            },
        }
    }

    /// Point all three relay endpoints at a mock backend
    pub fn with_mock_provider(mut self, mock: &MockProvider) -> Self {
        self.config.relay.text.url = mock.url("/models/text");
        self.config.relay.image.url = mock.url("/models/image");
        self.config.relay.multimodal.url = mock.url("/models/multimodal");
        self
    }

    /// Drop the provider credential
    pub fn without_api_key(mut self) -> Self {
        self.config.relay.api_key = None;
        self
    }

    /// Replace the text instruction template
    pub fn with_prompt_template(mut self, template: &str) -> Self {
        self.config.relay.text.prompt_template = template.to_string();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Serve static assets from the given directory
    pub fn with_static_assets(mut self, directory: &std::path::Path) -> Self {
        self.config.server.static_assets.enabled = true;
        self.config.server.static_assets.directory = directory.to_path_buf();
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
