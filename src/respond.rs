//! JSON response helper shared by all handlers.
//!
//! Serializes a body with `serde_json` and pairs it with an explicit status
//! code. Serialization failures become `AppError::Serialization` and are
//! rendered as a 500 JSON error instead of panicking.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Serialize `body` as JSON and respond with `status`.
pub fn respond<T: Serialize + ?Sized>(body: &T, status: StatusCode) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            bytes,
        )
            .into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Handler return type wrapping [`respond`].
#[derive(Debug, Clone)]
pub struct Respond<T>(pub T, pub StatusCode);

impl<T: Serialize> IntoResponse for Respond<T> {
    fn into_response(self) -> Response {
        respond(&self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::ser::Error as _;
    use serde::Serializer;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn test_respond_sets_status_and_content_type() {
        let response = respond(&serde_json::json!({"a": 1}), StatusCode::CREATED);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_serialization_failure_is_500() {
        let response = Respond(Unserializable, StatusCode::OK).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }
}
