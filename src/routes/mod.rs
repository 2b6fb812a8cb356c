//! HTTP route handlers.
//!
//! The router is a single liveness route plus JSON fallbacks for unknown
//! paths and unsupported methods. Request tracing is enabled via middleware
//! that generates a unique request ID for each incoming request.

pub mod health;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Fallback for paths with no route.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Creates the Axum router with all routes and headers.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(
            "/health",
            get(health::health).fallback(method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::middleware::REQUEST_ID_HEADER;
    use health::{HealthResponse, HEALTH_OK};

    async fn send(method: Method, uri: &str) -> axum::response::Response {
        create_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_health() {
        let response = send(Method::GET, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response.headers().get(CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_HEALTH
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(body_json(response).await, serde_json::json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn test_health_is_idempotent() {
        for _ in 0..10 {
            let response = send(Method::GET, "/health").await;
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body.status, HEALTH_OK);
        }
    }

    #[tokio::test]
    async fn test_health_ignores_query_and_body() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .uri("/health?verbose=true")
                    .header("x-probe", "kubelet")
                    .body(Body::from("ignored"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn test_post_health_is_method_not_allowed() {
        let response = send(Method::POST, "/health").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let response = send(Method::GET, "/healthz").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(CACHE_CONTROL).is_none());
        assert_eq!(body_json(response).await["error"], "Not found: /healthz");
    }
}
