//! Server error types
//!
//! Every core operation returns a typed error union; the boundary renders it
//! into a failure envelope instead of catching an unstructured fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use villa_core::ApiResponse;
use villa_repository::StoreError;

/// Server error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain rule violation: duplicate unique field, dangling reference,
    /// patch validation failure
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Requested identity is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Null/empty/mismatched payload, rejected before the store is touched
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or malformed credentials
    #[error("Authorization required")]
    Unauthorized,

    /// Credentials do not carry the admin role
    #[error("Admin role required")]
    Forbidden,

    /// Unexpected backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn messages(self) -> Vec<String> {
        match self {
            ApiError::Validation(messages) => messages,
            other => vec![other.to_string()],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::failure(status.as_u16(), self.messages());
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key } => ApiError::NotFound(format!("Entity not found: {key}")),
            StoreError::Duplicate { key } => {
                ApiError::Validation(vec![format!("Duplicate key: {key}")])
            }
            StoreError::Detached { .. } | StoreError::Backend(_) => {
                ApiError::Storage(err.to_string())
            }
        }
    }
}
