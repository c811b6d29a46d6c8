//! Artwork Error Types
//!
//! Artwork-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Artwork-specific result type alias
pub type ArtworkResult<T> = Result<T, ArtworkError>;

/// Message for a create request missing a required field
pub const REQUIRED_FIELDS_MESSAGE: &str = "title, description and images[] are required";

/// Artwork-specific error variants
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// No artwork with this id (including ids that do not parse)
    #[error("Not found")]
    NotFound,

    /// Slug already held by another artwork
    #[error("Slug is already in use")]
    SlugTaken,

    /// Every slug candidate is taken
    #[error("Could not allocate a unique slug")]
    SlugExhausted,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ArtworkError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ArtworkError::Validation(_) => ErrorKind::BadRequest,
            ArtworkError::NotFound => ErrorKind::NotFound,
            ArtworkError::SlugTaken | ArtworkError::SlugExhausted => ErrorKind::Conflict,
            ArtworkError::Database(_) | ArtworkError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server-side details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal("Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            ArtworkError::Database(e) => {
                tracing::error!(error = %e, "Artwork database error");
            }
            ArtworkError::Internal(msg) => {
                tracing::error!(message = %msg, "Artwork internal error");
            }
            ArtworkError::SlugExhausted => {
                tracing::warn!("Slug candidates exhausted");
            }
            _ => {
                tracing::debug!(error = %self, "Artwork error");
            }
        }
    }
}

impl IntoResponse for ArtworkError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ArtworkError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => ArtworkError::Validation(err.message().to_string()),
            ErrorKind::NotFound => ArtworkError::NotFound,
            _ => ArtworkError::Internal(err.to_string()),
        }
    }
}
