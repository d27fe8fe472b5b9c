//! Error Types
//!
//! Layered error types with HTTP status code mapping at the API boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported user role: {0}")]
    UnsupportedRole(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("User identification must be a positive number, got {0}")]
    InvalidIdentification(i64),

    #[error("User name is required.")]
    EmptyName,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Application-level errors returned by the application service
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(String),
}

impl ApplicationError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        ApplicationError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApplicationError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| format!("{field}: invalid"), ToString::to_string)
                })
            })
            .collect();
        messages.sort();
        ApplicationError::Validation(messages.join(" "))
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Unexpected error occurred.")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Application(app_error @ ApplicationError::Database(detail)) => {
                tracing::error!(error = %detail, "Request failed with a database error");
                (app_error.status_code(), "Internal server error.".to_string())
            }
            ApiError::Application(app_error) => (app_error.status_code(), app_error.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Request failed with an unexpected error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
