//! Domain Services
//!
//! Pure certificate identifier and verification-hash logic.

use platform::crypto::{constant_time_eq, sha256_hex};
use regex::Regex;
use std::sync::LazyLock;

pub const CERTIFICATE_ID_PREFIX: &str = "MINI";

/// Characters kept from the student and course identifiers
pub const ID_SEGMENT_LEN: usize = 8;

/// Random bytes per identifier (8 hex characters)
pub const RANDOM_BYTES_LEN: usize = 4;

/// Hex characters kept from the SHA-256 digest
pub const VERIFICATION_HASH_LEN: usize = 16;

/// Leading timestamp digits dropped from the date fragment
const TIMESTAMP_SKIP: usize = 4;

/// The format only admits 6 to 8 digits
const TIMESTAMP_MAX_DIGITS: usize = 8;

static CERTIFICATE_ID_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^MINI-[A-F0-9]{8}-[A-F0-9]{8}-[0-9]{6,8}-[A-F0-9]{8}$")
        .expect("certificate id pattern is valid")
});

/// Format-only check: says nothing about whether the certificate exists
pub fn validate_certificate_id_format(certificate_id: &str) -> bool {
    CERTIFICATE_ID_FORMAT.is_match(certificate_id)
}

/// First `max` characters of `value` (whole chars, never split)
pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Date-like fragment of a millisecond timestamp
pub fn timestamp_fragment(timestamp_ms: i64) -> String {
    timestamp_ms
        .to_string()
        .chars()
        .skip(TIMESTAMP_SKIP)
        .take(TIMESTAMP_MAX_DIGITS)
        .collect()
}

/// `MINI-<student>-<course>-<timestamp>-<random>`, upper-cased
pub fn compose_certificate_id(
    student_id: &str,
    course_id: &str,
    timestamp_ms: i64,
    random_hex: &str,
) -> String {
    let timestamp = timestamp_fragment(timestamp_ms);
    let body = [
        truncate_chars(student_id, ID_SEGMENT_LEN),
        truncate_chars(course_id, ID_SEGMENT_LEN),
        timestamp.as_str(),
        random_hex,
    ]
    .join("-");

    format!("{}-{}", CERTIFICATE_ID_PREFIX, body.to_uppercase())
}

/// First 16 lowercase hex chars of SHA-256(enrollment ‖ course ‖ date)
///
/// Inputs are concatenated without separator or normalization.
pub fn verification_hash(enrollment_id: &str, course_id: &str, completion_date: &str) -> String {
    let mut digest = sha256_hex(format!("{enrollment_id}{course_id}{completion_date}").as_bytes());
    digest.truncate(VERIFICATION_HASH_LEN);
    digest
}

/// Recompute the hash and compare in constant time
pub fn verify_hash(
    enrollment_id: &str,
    course_id: &str,
    completion_date: &str,
    claimed: &str,
) -> bool {
    let expected = verification_hash(enrollment_id, course_id, completion_date);
    constant_time_eq(expected.as_bytes(), claimed.trim().to_ascii_lowercase().as_bytes())
}
