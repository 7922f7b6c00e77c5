use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::types::now_ms;

/// JSON error body returned by every failing HTTP endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
    /// HTTP status code.
    pub status: u16,
    /// HTTP status reason phrase (e.g. "Bad Request").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    /// The request path that caused the error.
    pub path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: now_ms(),
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, path)
    }

    pub fn not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, path)
    }

    pub fn bad_gateway(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message, path)
    }

    pub fn internal(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, path)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
