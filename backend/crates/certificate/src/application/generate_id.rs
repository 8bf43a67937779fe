//! Certificate Identifier Generation

use platform::clock::Clock;
use platform::crypto::{EntropySource, random_hex};

use crate::domain::CertificateId;
use crate::domain::services::{RANDOM_BYTES_LEN, compose_certificate_id};
use crate::error::{CertificateError, CertificateResult};

/// Builds certificate identifiers from the current time and fresh randomness
pub struct CertificateIdGenerator<C, E>
where
    C: Clock,
    E: EntropySource,
{
    clock: C,
    entropy: E,
}

impl<C, E> CertificateIdGenerator<C, E>
where
    C: Clock,
    E: EntropySource,
{
    pub fn new(clock: C, entropy: E) -> Self {
        Self { clock, entropy }
    }

    /// `enrollment_id` does not contribute to the identifier.
    pub fn generate(
        &self,
        _enrollment_id: &str,
        course_id: &str,
        student_id: &str,
    ) -> CertificateResult<CertificateId> {
        if student_id.trim().is_empty() {
            return Err(CertificateError::MissingIdentifier("studentId"));
        }
        if course_id.trim().is_empty() {
            return Err(CertificateError::MissingIdentifier("courseId"));
        }

        let random = random_hex(&self.entropy, RANDOM_BYTES_LEN);
        let id = CertificateId::from_generated(compose_certificate_id(
            student_id,
            course_id,
            self.clock.now_ms(),
            &random,
        ));

        // Non-hex source identifiers produce ids the format check rejects
        if !id.has_valid_format() {
            tracing::warn!(
                certificate_id = %id,
                "Generated certificate id does not match the public format"
            );
        }

        Ok(id)
    }
}
