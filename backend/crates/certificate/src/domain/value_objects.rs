//! Value Objects

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::services::validate_certificate_id_format;
use crate::error::{CertificateError, CertificateResult};

/// Certificate identifier (`MINI-XXXXXXXX-XXXXXXXX-DDDDDDDD-XXXXXXXX`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateId(String);

impl CertificateId {
    /// Accepts any casing; stored upper-cased
    pub fn parse(value: &str) -> CertificateResult<Self> {
        if !validate_certificate_id_format(value) {
            return Err(CertificateError::InvalidCertificateId(value.to_string()));
        }
        Ok(Self(value.to_uppercase()))
    }

    /// Identifier produced by the generator, kept verbatim even when the
    /// source identifiers were not hexadecimal
    pub(crate) fn from_generated(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_valid_format(&self) -> bool {
        validate_certificate_id_format(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion date as hashed into the verification hash
///
/// The hash is computed over these exact characters, so issuing and
/// verifying must build the value the same way. Prefer the `From`
/// conversions over raw strings:
/// - `NaiveDate` → `2024-06-15`
/// - `DateTime<Utc>` → `2024-06-15T09:30:00.000Z`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionDate(String);

impl CompletionDate {
    /// Use a caller-supplied string unchanged
    pub fn raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<NaiveDate> for CompletionDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for CompletionDate {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
