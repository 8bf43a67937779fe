//! Certificate Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects and pure identifier/hash services
//! - `application/` - Identifier generator and issue use case
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Notes
//! - Format validation checks shape only, never existence
//! - The verification hash is a short integrity tag, not a signature

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CertificateIdGenerator, IssueCertificateInput, IssueCertificateUseCase, IssuedCertificate,
};
pub use domain::services::{validate_certificate_id_format, verification_hash, verify_hash};
pub use domain::{CertificateId, CompletionDate};
pub use error::{CertificateError, CertificateResult};
pub use presentation::certificate_router;

#[cfg(test)]
mod tests;
