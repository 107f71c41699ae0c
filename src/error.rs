//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CursorError;
use crate::source::SourceError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "kind": "validation_error",
///     "code": 1001,
///     "message": "invalid request: role is required",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with kind, numeric code, and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error category: `validation_error`, `cursor_error`, or `internal_error`.
    #[schema(value_type = String)]
    pub kind: &'static str,
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Required query fields are missing or malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The continuation token could not be decoded.
    #[error("invalid page token: {0}")]
    InvalidPageToken(#[from] CursorError),

    /// A result source failed; the detail stays server-side.
    #[error("internal error")]
    SourceFailure(#[from] SourceError),
}

impl GatewayError {
    /// Returns the error category reported to clients.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "validation_error",
            Self::InvalidPageToken(_) => "cursor_error",
            Self::SourceFailure(_) => "internal_error",
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidPageToken(_) => 1002,
            Self::SourceFailure(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidPageToken(_) => StatusCode::BAD_REQUEST,
            Self::SourceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                kind: self.kind(),
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::PoolId;

    async fn body_json(err: GatewayError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("body is not json");
        };
        (status, json)
    }

    #[tokio::test]
    async fn validation_error_shape() {
        let (status, json) =
            body_json(GatewayError::InvalidRequest("role is required".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["kind"], "validation_error");
        assert_eq!(json["error"]["code"], 1001);
        assert_eq!(json["error"]["message"], "invalid request: role is required");
        assert!(json["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn cursor_error_shape() {
        let (status, json) = body_json(CursorError::Encoding.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["kind"], "cursor_error");
        assert_eq!(json["error"]["code"], 1002);
    }

    #[tokio::test]
    async fn source_failure_is_opaque() {
        let err: GatewayError =
            SourceError::new(PoolId::from("eu_grad_pool"), "db password rejected").into();
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["kind"], "internal_error");
        assert_eq!(json["error"]["message"], "internal error");
        assert!(!json.to_string().contains("password"));
        assert!(!json.to_string().contains("eu_grad_pool"));
    }
}
