use anyhow::{Context, Result};
use clap::Parser;
use mistnet_server::config::{DEFAULT_CONFIG_FILE, MistConfig};
use mistnet_server::MistServer;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mistnet-signaling")]
#[command(version, about = "Signaling relay for mistnet peers")]
struct Cli {
    /// Path of the JSON config file. Created with defaults if missing.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Listen on this port instead of the configured one.
    #[arg(short, long)]
    port: Option<u16>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json);

    let mut config = MistConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(port) = cli.port {
        config.global_node.port = port;
    }

    info!(
        "Starting mistnet signaling v{} (enabled: {}, port: {})",
        env!("CARGO_PKG_VERSION"),
        config.global_node.enable,
        config.global_node.port
    );

    MistServer::new(config)
        .start()
        .await
        .context("Signaling server failed")?;

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
