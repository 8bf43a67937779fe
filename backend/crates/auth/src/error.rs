//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::{AppError, ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signing secret absent or empty (startup misconfiguration)
    #[error("JWT signing secret is not configured")]
    MissingSecret,

    /// Unusable configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token encoding failed
    #[error("Failed to sign session token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// No token on the request
    #[error("Not authorized to access this route")]
    MissingToken,

    /// Token malformed or signature mismatch
    #[error("Session token is invalid")]
    SessionInvalid,

    /// Token past its expiry
    #[error("Session token has expired")]
    SessionExpired,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::SessionInvalid | AuthError::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::MissingSecret | AuthError::InvalidConfig(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AuthError::Signing(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken | AuthError::SessionInvalid | AuthError::SessionExpired => {
                ErrorKind::Unauthorized
            }
            AuthError::MissingSecret | AuthError::InvalidConfig(_) => ErrorKind::ServiceUnavailable,
            AuthError::Signing(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = match self {
            // Configuration and signing details stay in the logs
            AuthError::MissingSecret | AuthError::InvalidConfig(_) => {
                AppError::service_unavailable("Authentication is not available")
            }
            AuthError::Signing(_) | AuthError::Internal(_) => AppError::internal("Server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        };
        match self {
            AuthError::SessionExpired => err.with_action("Please sign in again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::MissingSecret | AuthError::InvalidConfig(_) => {
                tracing::error!(error = %self, "Auth misconfiguration");
            }
            AuthError::Signing(e) => {
                tracing::error!(error = %e, "Session token signing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::SessionInvalid => {
                tracing::warn!("Rejected invalid session token");
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
