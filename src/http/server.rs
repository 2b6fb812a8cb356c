//! HTTP/HTTPS server startup logic.
//!
//! Supports two TLS modes:
//! - None: Plain HTTP
//! - Manual: User-provided certificate files

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError, TlsMode};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),
}

/// Start the HTTP/HTTPS server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let grace = Duration::from_secs(config.http.shutdown_timeout_seconds);
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone(), grace);

    match config.http.tls.mode {
        TlsMode::None => {
            tracing::warn!(
                "TLS disabled - server running on plain HTTP (not recommended for production)"
            );
            start_plain_server(app, addr, handle).await
        }
        TlsMode::Manual => {
            let (cert_path, key_path) = match (
                config.http.tls.cert_path.as_deref(),
                config.http.tls.key_path.as_deref(),
            ) {
                (Some(cert), Some(key)) => (cert, key),
                _ => {
                    return Err(ServerError::TlsConfig(
                        "manual TLS mode requires cert_path and key_path".to_string(),
                    ))
                }
            };
            start_manual_tls_server(app, addr, cert_path, key_path, handle).await
        }
    }
}

/// Start a plain HTTP server (no TLS).
async fn start_plain_server(
    app: Router,
    addr: SocketAddr,
    handle: Handle,
) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Start HTTPS server with user-provided certificates.
async fn start_manual_tls_server(
    app: Router,
    addr: SocketAddr,
    cert_path: &str,
    key_path: &str,
    handle: Handle,
) -> Result<(), ServerError> {
    tracing::info!(%addr, cert = %cert_path, key = %key_path, "Starting HTTPS server (manual certs)");

    let rustls_config = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))?;

    shutdown::setup_reload_handler(
        rustls_config.clone(),
        cert_path.to_string(),
        key_path.to_string(),
    );

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTPS server stopped");
    Ok(())
}
