//! Liveness service entry point.
//!
//! Parses the command line, loads configuration from TOML, initializes
//! tracing, builds the Axum router and runs the HTTP server until a shutdown
//! signal arrives.

use std::path::{Path, PathBuf};

use clap::Parser;

use liveness::config::{AppConfig, DEFAULT_CONFIG_PATH};
use liveness::http::start_server;
use liveness::{create_router, telemetry};

/// Liveness: an HTTP liveness probe service
#[derive(Parser, Debug)]
#[command(name = "liveness", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "liveness=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit --config must exist; the default path is optional
    let config_path = args.config.or_else(|| {
        Path::new(DEFAULT_CONFIG_PATH)
            .exists()
            .then(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    });
    let config = AppConfig::load_or_default(config_path.as_ref())?;

    let log_filter = telemetry::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    telemetry::init(&log_filter, &config.logging);

    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        None => tracing::info!("No configuration file found, using defaults"),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        tls = ?config.http.tls.mode,
        log_format = %config.logging.format,
        "HTTP server configured"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
