use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ingest::NormalizeError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Structured normalization errors (`{"error": "..."}`) are *not* server
/// errors; they are returned as regular 200 bodies by the handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Normalization failed: {0}")]
    Normalize(NormalizeError),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::UnsupportedPlatform(_) | ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Normalize(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Normalize(_) => "INTERNAL_ERROR",
            ServerError::UnsupportedPlatform(_) => "UNSUPPORTED_PLATFORM",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        // Field-access details are logged, never returned.
        let message = match &self {
            ServerError::Normalize(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(code, error = %self, "request_failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<NormalizeError> for ServerError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::UnsupportedPlatform(tag) => ServerError::UnsupportedPlatform(tag),
            other => ServerError::Normalize(other),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_access_maps_to_500() {
        let err: ServerError = NormalizeError::FieldAccess {
            path: "sender.id".into(),
            expected: "a string",
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn unsupported_platform_maps_to_404() {
        let err: ServerError = NormalizeError::UnsupportedPlatform("myspace".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unsupported platform: myspace");
    }

    #[test]
    fn bad_json_maps_to_400() {
        let err: ServerError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }
}
