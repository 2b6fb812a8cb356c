//! HTTP server module with optional TLS.
//!
//! - **None (default)**: Plain HTTP, typically behind a load balancer
//! - **Manual**: User-provided certificate and key files
//!
//! Graceful shutdown runs on SIGTERM/SIGINT; SIGHUP reloads manual
//! certificates without a restart.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
