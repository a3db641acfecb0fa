use std::path::PathBuf;

use clap::Parser;

/// Triage inference relay
#[derive(Debug, Parser)]
#[command(name = "triage", about = "Tri-modal relay to hosted inference providers")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "triage.toml", env = "TRIAGE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "TRIAGE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
