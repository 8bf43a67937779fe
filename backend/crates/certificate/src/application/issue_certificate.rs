//! Issue Certificate Use Case

use platform::clock::Clock;
use platform::crypto::EntropySource;
use std::sync::Arc;

use crate::application::generate_id::CertificateIdGenerator;
use crate::domain::services::verification_hash;
use crate::domain::{CertificateId, CompletionDate};
use crate::error::{CertificateError, CertificateResult};

/// Input DTO for issue certificate
#[derive(Debug, Clone)]
pub struct IssueCertificateInput {
    pub enrollment_id: String,
    pub course_id: String,
    pub student_id: String,
    pub completion_date: CompletionDate,
}

/// Output DTO for issue certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCertificate {
    pub certificate_id: CertificateId,
    pub verification_hash: String,
}

/// Issue Certificate Use Case
pub struct IssueCertificateUseCase<C, E>
where
    C: Clock,
    E: EntropySource,
{
    generator: Arc<CertificateIdGenerator<C, E>>,
}

impl<C, E> IssueCertificateUseCase<C, E>
where
    C: Clock,
    E: EntropySource,
{
    pub fn new(generator: Arc<CertificateIdGenerator<C, E>>) -> Self {
        Self { generator }
    }

    pub fn execute(&self, input: IssueCertificateInput) -> CertificateResult<IssuedCertificate> {
        if input.completion_date.is_empty() {
            return Err(CertificateError::MissingIdentifier("completionDate"));
        }

        let certificate_id =
            self.generator
                .generate(&input.enrollment_id, &input.course_id, &input.student_id)?;

        let verification_hash = verification_hash(
            &input.enrollment_id,
            &input.course_id,
            input.completion_date.as_str(),
        );

        tracing::info!(
            certificate_id = %certificate_id,
            course_id = %input.course_id,
            "Issued certificate"
        );

        Ok(IssuedCertificate {
            certificate_id,
            verification_hash,
        })
    }
}
