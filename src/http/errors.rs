//! # HTTP API Errors
//!
//! Error types for the HTTP surface, each carrying its status code.
//! Validation failures are minted here and never reach the service;
//! service outcomes are converted in the other direction. An unclassified
//! store failure becomes a 500, never a 404 or 409.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::ServiceError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (blank required field)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Duplicate planet name on create
    #[error("planet name already exists: {0}")]
    Conflict(String),

    /// Lookup or delete target absent
    #[error("planet not found")]
    NotFound,

    /// Opaque store failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Conflict(name) => ApiError::Conflict(name),
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Store(store_err) => ApiError::Internal(store_err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
