//! Certificate Error Types
//!
//! Certificate-specific error variants that integrate with the unified
//! `kernel::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::{AppError, ErrorKind};
use thiserror::Error;

pub type CertificateResult<T> = Result<T, CertificateError>;

#[derive(Debug, Error)]
pub enum CertificateError {
    /// Required input missing or blank
    #[error("{0} is required")]
    MissingIdentifier(&'static str),

    /// Field present with a JSON type that has no text form
    #[error("{0} must be a string")]
    InvalidField(&'static str),

    /// Body is not a JSON object of the expected shape
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// String does not have the certificate identifier shape
    #[error("Invalid certificate id format: {0}")]
    InvalidCertificateId(String),
}

impl CertificateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CertificateError::MissingIdentifier(_)
            | CertificateError::InvalidField(_)
            | CertificateError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            CertificateError::InvalidCertificateId(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CertificateError::MissingIdentifier(_)
            | CertificateError::InvalidField(_)
            | CertificateError::MalformedBody(_) => ErrorKind::BadRequest,
            CertificateError::InvalidCertificateId(_) => ErrorKind::UnprocessableEntity,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl IntoResponse for CertificateError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Certificate request rejected");
        self.to_app_error().into_response()
    }
}
