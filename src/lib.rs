//! Liveness: a minimal HTTP liveness probe service.
//!
//! Exposes `GET /health`, answering `200 {"status":"OK"}` for as long as the
//! process can serve HTTP. The binary in `main.rs` wires configuration,
//! logging and the server around the router built here.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod respond;
pub mod routes;
pub mod telemetry;

pub use error::AppError;
pub use routes::create_router;
