//! Centralized API error handling for loanbook
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping and JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// API error type with HTTP status code mapping.
///
/// Variant messages are rendered verbatim as the `message` field of the
/// JSON error body, so handlers pass user-facing text.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    Internal { message: String, detail: String },
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    /// Internal error with a handler-specific message and the underlying detail
    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        // Log server errors; client errors are only interesting at debug
        let error = match self {
            ApiError::Internal { detail, .. } => {
                tracing::error!(error = %detail, message = %message, "Server error occurred");
                Some(detail)
            }
            _ => {
                tracing::debug!(message = %message, status = %status, "Client error occurred");
                None
            }
        };

        (status, Json(ErrorBody { message, error })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal("Internal server error", err)
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
