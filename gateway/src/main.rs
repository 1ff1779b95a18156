//! Gateway entry point: flags, configuration, tracing, server start.

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use gateway::inbound::http::health::HealthState;
use gateway::server::{create_server, GatewayConfig};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "gateway", about = "REST gateway for the places store service")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long = "config-path", default_value = "config.yaml")]
    config_path: std::path::PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let config = GatewayConfig::from_file(&args.config_path)
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &config)?;
    server.await
}
