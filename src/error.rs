//! Error types for the API server
//!
//! Provides unified error handling using thiserror. Quota denials are
//! normal policy return values; they only become an `ApiError` at the
//! HTTP boundary, where a refused creation surfaces as 403 with the
//! reason text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

// == Api Error Enum ==
/// Unified error type for the API server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or incomplete request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The caller may not perform this action (quota denial, ownership)
    #[error("{0}")]
    Forbidden(String),

    /// Unknown resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PostNotFound(id) => ApiError::NotFound(format!("post {id}")),
            StoreError::UserNotFound(id) => ApiError::NotFound(format!("user {id}")),
            StoreError::NotOwner { .. } => {
                ApiError::Forbidden("You do not own this post".to_string())
            }
            StoreError::QuotaDenied(reason) => ApiError::Forbidden(reason.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Not found: {msg}")),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DenyReason;

    #[test]
    fn test_status_code_mapping() {
        let cases = vec![
            (
                ApiError::InvalidRequest("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (ApiError::NotFound("post 9".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_quota_denial_maps_to_forbidden_with_reason_text() {
        let err: ApiError = StoreError::QuotaDenied(DenyReason::ActiveLimitReached(1)).into();
        assert_eq!(err.to_string(), "Maximum active posts reached (1)");
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err: ApiError = StoreError::PostNotFound("9".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
