//! Error types for the gateway crate.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quill_core::CodecError;
use serde_json::json;

/// Errors that can occur during gateway request handling or startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A transform rejected its input or scheme.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The body could not be read or deserialized as the expected JSON.
    #[error("invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    /// The request body is well-formed JSON but semantically invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An environment variable holds an unusable value.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Codec(_) | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Body(rejection) => rejection.status(),
            GatewayError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({"success": false, "error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::Scheme;

    #[test]
    fn codec_errors_are_client_errors() {
        let unknown = GatewayError::from(CodecError::UnknownScheme("base99".to_owned()));
        assert_eq!(unknown.into_response().status(), StatusCode::BAD_REQUEST);

        let one_way = GatewayError::from(CodecError::NotReversible(Scheme::Md5Hash));
        assert_eq!(one_way.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_error_returns_500() {
        let err = GatewayError::Config("QUILL_LISTEN_ADDR is not a socket address".to_owned());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "config errors must map to 500"
        );
    }

    #[test]
    fn codec_display_is_passed_through() {
        let err = GatewayError::from(CodecError::UnknownScheme("rot99".to_owned()));
        assert_eq!(err.to_string(), "unknown encoding 'rot99'");
    }

    #[tokio::test]
    async fn error_body_has_success_false() {
        let resp = GatewayError::InvalidRequest("empty steps".to_owned()).into_response();
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "invalid request: empty steps");
    }
}
