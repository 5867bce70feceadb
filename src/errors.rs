//! Centralized error handling.
//!
//! Every failure is rendered as the same envelope the success paths use:
//! `{ "success": false, "result": null, "message": "..." }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::MSG_SERVER_ERROR;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate emails are reported as a bad request, not 409
            AppError::Conflict(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_SERVER_ERROR.to_string()
            }
            AppError::Jwt(e) => {
                tracing::warn!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_SERVER_ERROR.to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Whether this error is a server-side failure rather than a caller mistake
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }

    /// Render the failure envelope with the given placeholder result.
    fn into_envelope(self, result: Value) -> Response {
        let status = self.status();
        let body = json!({
            "success": false,
            "result": result,
            "message": self.user_message(),
        });

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_envelope(Value::Null)
    }
}

/// Failure of an operation whose success result is an array (list, search).
///
/// Renders `result: []` instead of `null` so callers can always iterate.
#[derive(Debug)]
pub struct CollectionError(pub AppError);

impl From<AppError> for CollectionError {
    fn from(err: AppError) -> Self {
        CollectionError(err)
    }
}

impl IntoResponse for CollectionError {
    fn into_response(self) -> Response {
        self.0.into_envelope(Value::Array(Vec::new()))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    /// Not-found error naming the identifier that was looked up
    pub fn no_document(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("No document found by this id: {}", id))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
