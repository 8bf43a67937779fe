//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use platform::clock::Clock;
use platform::crypto::EntropySource;
use std::sync::Arc;

use crate::application::{CertificateIdGenerator, IssueCertificateInput, IssueCertificateUseCase};
use crate::domain::CompletionDate;
use crate::domain::services::{validate_certificate_id_format, verify_hash};
use crate::error::{CertificateError, CertificateResult};
use crate::presentation::dto::{
    IssueCertificateRequest, IssueCertificateResponse, ValidityResponse, VerifyHashRequest,
    text_field,
};

/// Shared state for certificate handlers
pub struct CertificateAppState<C: Clock, E: EntropySource> {
    pub generator: Arc<CertificateIdGenerator<C, E>>,
}

impl<C: Clock, E: EntropySource> Clone for CertificateAppState<C, E> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
        }
    }
}

/// POST /api/certificates
pub async fn issue_certificate<C, E>(
    State(state): State<CertificateAppState<C, E>>,
    body: Result<Json<IssueCertificateRequest>, JsonRejection>,
) -> CertificateResult<impl IntoResponse>
where
    C: Clock + 'static,
    E: EntropySource + 'static,
{
    let Json(req) = body.map_err(malformed)?;
    let use_case = IssueCertificateUseCase::new(state.generator.clone());

    let completion_date = text_field(req.completion_date, "completionDate")?;

    let issued = use_case.execute(IssueCertificateInput {
        enrollment_id: text_field(req.enrollment_id, "enrollmentId")?,
        course_id: text_field(req.course_id, "courseId")?,
        student_id: text_field(req.student_id, "studentId")?,
        completion_date: CompletionDate::raw(completion_date),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(IssueCertificateResponse {
            success: true,
            certificate_id: issued.certificate_id.into_inner(),
            verification_hash: issued.verification_hash,
        }),
    ))
}

/// GET /api/certificates/{certificate_id}/format
pub async fn check_format(Path(certificate_id): Path<String>) -> Json<ValidityResponse> {
    Json(ValidityResponse {
        success: true,
        valid: validate_certificate_id_format(&certificate_id),
    })
}

/// POST /api/certificates/verify
pub async fn verify(
    body: Result<Json<VerifyHashRequest>, JsonRejection>,
) -> CertificateResult<Json<ValidityResponse>> {
    let Json(req) = body.map_err(malformed)?;
    let course_id = text_field(req.course_id, "courseId")?;

    let valid = verify_hash(
        &text_field(req.enrollment_id, "enrollmentId")?,
        &course_id,
        &text_field(req.completion_date, "completionDate")?,
        &text_field(req.verification_hash, "verificationHash")?,
    );

    if !valid {
        tracing::debug!(course_id = %course_id, "Verification hash mismatch");
    }

    Ok(Json(ValidityResponse {
        success: true,
        valid,
    }))
}

fn malformed(rejection: JsonRejection) -> CertificateError {
    CertificateError::MalformedBody(rejection.body_text())
}
