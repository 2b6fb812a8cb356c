//! Graceful shutdown and signal handling.
//!
//! Handles:
//! - SIGTERM/SIGINT: Graceful shutdown with connection draining
//! - SIGHUP: Certificate reload (manual TLS mode only)

use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

/// Resolves when SIGINT or SIGTERM arrives.
///
/// If a handler cannot be installed the corresponding branch never fires;
/// the other signal still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// On either signal the server stops accepting connections and waits up to
/// `grace` for in-flight requests before closing the rest.
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(async move {
        shutdown_signal().await;

        handle.graceful_shutdown(Some(grace));
        tracing::info!(
            grace_secs = grace.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}

/// Setup SIGHUP handler for certificate reload (manual TLS mode).
#[cfg(unix)]
pub fn setup_reload_handler(tls_config: RustlsConfig, cert_path: String, key_path: String) {
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(sighup) => sighup,
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGHUP handler");
                return;
            }
        };

        while sighup.recv().await.is_some() {
            tracing::info!("Received SIGHUP, reloading TLS certificates");

            match tls_config.reload_from_pem_file(&cert_path, &key_path).await {
                Ok(()) => {
                    tracing::info!(cert = %cert_path, key = %key_path, "TLS certificates reloaded successfully");
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        cert = %cert_path,
                        key = %key_path,
                        "Failed to reload TLS certificates"
                    );
                }
            }
        }
    });
}

/// No-op reload handler for non-Unix platforms.
#[cfg(not(unix))]
pub fn setup_reload_handler(_tls_config: RustlsConfig, _cert_path: String, _key_path: String) {
    tracing::warn!("Certificate hot-reload via SIGHUP not supported on this platform");
}
