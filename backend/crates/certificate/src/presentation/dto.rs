//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CertificateError, CertificateResult};

/// POST /api/certificates
///
/// Identifier fields accept any JSON scalar; absent and `null` fields read
/// as blank and are rejected by the use case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueCertificateRequest {
    pub enrollment_id: Option<Value>,
    pub course_id: Option<Value>,
    pub student_id: Option<Value>,
    pub completion_date: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCertificateResponse {
    pub success: bool,
    pub certificate_id: String,
    pub verification_hash: String,
}

/// POST /api/certificates/verify
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyHashRequest {
    pub enrollment_id: Option<Value>,
    pub course_id: Option<Value>,
    pub completion_date: Option<Value>,
    pub verification_hash: Option<Value>,
}

/// Result of a format or hash check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityResponse {
    pub success: bool,
    pub valid: bool,
}

/// Text of a request field
///
/// Numbers are taken in their JSON spelling (`12345678` → `"12345678"`).
/// Arrays, objects and booleans are rejected.
pub fn text_field(value: Option<Value>, field: &'static str) -> CertificateResult<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(_) => Err(CertificateError::InvalidField(field)),
    }
}
