//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it answers 200 with `{"status":"OK"}` whenever the
//! process can serve HTTP. It never inspects dependencies.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::respond::Respond;

/// Value of `status` in every health response
pub const HEALTH_OK: &str = "OK";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always equal to `OK`.
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: HEALTH_OK.to_string(),
        }
    }
}

/// Health check handler.
pub async fn health() -> Respond<HealthResponse> {
    Respond(HealthResponse::default(), StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let Respond(body, status) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, HEALTH_OK);
    }

    #[tokio::test]
    async fn test_health_body_is_exact() {
        let response = health().await.into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"status":"OK"}"#);
    }
}
