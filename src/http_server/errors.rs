//! Structured API errors.
//!
//! Every error that leaves the boundary has the same shape: an HTTP status
//! plus `{"error_code": ..., "message": ...}`, where `error_code` is a
//! stable machine-readable string and `message` is for humans. Handlers
//! never panic for expected absence; they return one of these.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON body shared by every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error_code: String,
    pub message: String,
}

/// A structured API error: status + stable code + human message
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Create an error with an explicit status.
    pub fn new(
        status: StatusCode,
        error_code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            body: ErrorBody {
                error_code: error_code.into(),
                message: message.into(),
            },
        }
    }

    /// 404 with an entity-specific error code, e.g. `datasheet_not_found`.
    pub fn not_found(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_code, message)
    }

    /// 400 for business-rule rejections the serde boundary cannot catch.
    pub fn bad_request(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_code, message)
    }

    /// 401 for session-required routes without a valid token.
    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "A valid session token is required",
        )
    }

    /// 500 for unexpected internal failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server_error",
            message,
        )
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The stable error code string.
    pub fn error_code(&self) -> &str {
        &self.body.error_code
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shape() {
        let err = ApiError::not_found("datasheet_not_found", "Datasheet not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "datasheet_not_found");

        let json = serde_json::to_value(&err.body).unwrap();
        assert_eq!(json["error_code"], "datasheet_not_found");
        assert_eq!(json["message"], "Datasheet not found");
    }

    #[test]
    fn test_store_error_maps_to_internal() {
        let err = ApiError::from(StoreError::LockPoisoned);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "internal_server_error");
    }
}
