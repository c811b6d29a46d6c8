//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shared by every login failure so callers cannot tell an
/// unknown email from a wrong password.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// No session cookie on a request that needs one
    #[error("Unauthorized")]
    MissingToken,

    /// Malformed, tampered or expired session token
    #[error("Invalid token")]
    InvalidToken,

    /// Signing key absent from configuration
    #[error("JWT signing key is not configured")]
    MissingSigningKey,

    /// Unusable configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed request or rejected input
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::MissingToken | AuthError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::MissingSigningKey
            | AuthError::InvalidConfig(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) | AuthError::InvalidConfig(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::MissingSigningKey => {
                tracing::error!("JWT signing key missing");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Blocking task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_are_unauthorized() {
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_app_error().message(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_server_errors_are_redacted() {
        let err = AuthError::Internal("pool exploded at 10.0.0.3".to_string());
        let app_err = err.to_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(!app_err.message().contains("10.0.0.3"));
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Invalid email format"));
    }
}
