use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::dto::envelope::ApiResponse;

/// Application-level error taxonomy mapped to HTTP status codes.
///
/// `details` never reaches the client; it is attached to the tracing log so
/// internal context (driver errors, raw input) stays out of responses.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::NotFound { message, details } => (StatusCode::NOT_FOUND, message, details),
            AppError::Internal { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(%status, %details, "request failed: {message}");
        } else {
            tracing::debug!(%status, %details, "request rejected: {message}");
        }

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

/// Store failures surface a generic message; the driver error goes to the log.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(
            "Internal server error. Please try again later.",
            json!({ "source": e.to_string() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Tracking number not found", json!({}));
        assert_eq!(err.to_string(), "Tracking number not found");
    }

    #[test]
    fn test_sqlx_error_maps_to_generic_internal() {
        let err: AppError = sqlx::Error::PoolClosed.into();
        match err {
            AppError::Internal { message, details } => {
                assert_eq!(message, "Internal server error. Please try again later.");
                assert!(details["source"].is_string());
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
