//! API error types and response formatting.
//!
//! Two deliberate shapes, both carrying `success: false` and an `error`
//! string so clients never have to branch on body layout:
//! - missing/empty input → HTTP 400 with the validation message;
//! - unexpected handler failure → HTTP 200 with a themed error string and
//!   `provider: "error"`, matching the site's long-standing (non-standard)
//!   contract that only input validation uses a 4xx status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// API error type that converts to the service's JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request parameters (missing or empty required fields).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected handler-level failure.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, provider) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal handler error");
                (
                    StatusCode::OK,
                    "Even our complaint system is having complaints! How meta! 🤖💥".to_string(),
                    Some("error"),
                )
            }
        };

        let body = ErrorResponse {
            error,
            success: false,
            provider,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_display() {
        let err = ApiError::BadRequest("message cannot be empty".to_string());
        assert_eq!(err.to_string(), "bad request: message cannot be empty");
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("text is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_keep_http_200() {
        let response = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
