use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub static_assets: StaticAssetsConfig,
}

/// Health check endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

/// Static UI hosting configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticAssetsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory containing index.html and its assets
    #[serde(default = "default_static_directory")]
    pub directory: PathBuf,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: default_static_directory(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_static_directory() -> PathBuf {
    PathBuf::from("static")
}
