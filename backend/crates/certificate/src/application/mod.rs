//! Application Layer - Use Cases
//!
//! Identifier generation and certificate issuance.

pub mod generate_id;
pub mod issue_certificate;

pub use generate_id::CertificateIdGenerator;
pub use issue_certificate::{IssueCertificateInput, IssueCertificateUseCase, IssuedCertificate};
