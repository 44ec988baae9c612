//! API error types and conversions

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong admin API key
    Unauthorized,

    /// Resource not found
    NotFound(String),

    /// Invalid request payload
    BadRequest(String),

    /// Internal server error; the raw message is only exposed in
    /// development
    Internal { message: String, expose: bool },
}

impl ApiError {
    pub fn internal(err: impl std::fmt::Display, expose: bool) -> Self {
        ApiError::Internal {
            message: err.to_string(),
            expose,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Unauthorized", "code": "ADMIN_401" }),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Internal { message, expose } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "System error",
                    "message": if expose { message } else { "Internal server error".to_string() },
                    "code": "QS_500",
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
