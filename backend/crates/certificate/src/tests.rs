//! Crate-level tests: identifier generation, verification hash, router

#[cfg(test)]
mod generate_tests {
    use crate::application::CertificateIdGenerator;
    use crate::domain::services::validate_certificate_id_format;
    use platform::clock::{FixedClock, SystemClock};
    use platform::crypto::{FixedEntropy, OsEntropy, random_bytes};
    use regex::Regex;

    fn system_generator() -> CertificateIdGenerator<SystemClock, OsEntropy> {
        CertificateIdGenerator::new(SystemClock, OsEntropy)
    }

    #[test]
    fn test_generated_ids_validate_for_uuid_identifiers() {
        let generator = system_generator();
        for _ in 0..64 {
            let student = uuid::Uuid::new_v4().simple().to_string();
            let course = uuid::Uuid::new_v4().to_string();
            let id = generator.generate("enr", &course, &student).unwrap();
            assert!(
                validate_certificate_id_format(id.as_str()),
                "{id} should validate"
            );
        }
    }

    #[test]
    fn test_generated_ids_validate_for_object_id_identifiers() {
        let generator = system_generator();
        for _ in 0..64 {
            let student = hex::encode(random_bytes(12));
            let course = hex::encode(random_bytes(12));
            let id = generator.generate("enr", &course, &student).unwrap();
            assert!(id.has_valid_format(), "{id} should validate");
        }
    }

    #[test]
    fn test_repeated_calls_differ() {
        let generator = system_generator();
        let first = generator.generate("enr1", "course1", "student1").unwrap();
        let second = generator.generate("enr1", "course1", "student1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_different_instants_change_timestamp_segment() {
        let entropy = FixedEntropy::new([0x01, 0x02, 0x03, 0x04]);
        let earlier = CertificateIdGenerator::new(
            FixedClock::from_millis(1_718_409_600_123).unwrap(),
            entropy.clone(),
        );
        let later = CertificateIdGenerator::new(
            FixedClock::from_millis(1_718_409_655_000).unwrap(),
            entropy,
        );

        let a = earlier.generate("e", "c0ffee00", "deadbeef").unwrap();
        let b = later.generate("e", "c0ffee00", "deadbeef").unwrap();
        assert_eq!(a.as_str(), "MINI-DEADBEEF-C0FFEE00-40960012-01020304");
        assert_eq!(b.as_str(), "MINI-DEADBEEF-C0FFEE00-40965500-01020304");
    }

    #[test]
    fn test_readable_identifiers_are_truncated_and_uppercased() {
        let pattern = Regex::new(r"^MINI-STUDENT1-COURSE12-[0-9]{6,8}-[A-F0-9]{8}$").unwrap();
        let id = system_generator()
            .generate("enr1", "course12345678ABCD", "student12345678XYZ")
            .unwrap();
        assert!(pattern.is_match(id.as_str()), "unexpected id {id}");
        // Letters outside A-F cannot pass the public format
        assert!(!id.has_valid_format());
    }

    #[test]
    fn test_enrollment_id_currently_has_no_effect() {
        let generator = CertificateIdGenerator::new(
            FixedClock::from_millis(1_718_409_600_123).unwrap(),
            FixedEntropy::new([0xab, 0xcd, 0xef, 0x01]),
        );
        let a = generator.generate("enrollment-a", "c1", "s1").unwrap();
        let b = generator.generate("enrollment-b", "c1", "s1").unwrap();
        let c = generator.generate("", "c1", "s1").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_short_identifiers_are_kept_whole() {
        let generator = CertificateIdGenerator::new(
            FixedClock::from_millis(1_718_409_600_123).unwrap(),
            FixedEntropy::new([0xab, 0xcd, 0xef, 0x01]),
        );
        let id = generator.generate("e", "c1", "s1").unwrap();
        assert_eq!(id.as_str(), "MINI-S1-C1-40960012-ABCDEF01");
    }
}

#[cfg(test)]
mod hash_tests {
    use crate::application::{
        CertificateIdGenerator, IssueCertificateInput, IssueCertificateUseCase,
    };
    use crate::domain::CompletionDate;
    use crate::domain::services::{verification_hash, verify_hash};
    use crate::error::CertificateError;
    use chrono::NaiveDate;
    use platform::clock::FixedClock;
    use platform::crypto::FixedEntropy;
    use std::sync::Arc;

    fn is_lower_hex_16(value: &str) -> bool {
        value.len() == 16
            && value
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    fn use_case() -> IssueCertificateUseCase<FixedClock, FixedEntropy> {
        IssueCertificateUseCase::new(Arc::new(CertificateIdGenerator::new(
            FixedClock::from_millis(1_718_409_600_123).unwrap(),
            FixedEntropy::new([0xde, 0xad, 0xbe, 0xef]),
        )))
    }

    #[test]
    fn test_hash_is_pure() {
        let first = verification_hash("e1", "c1", "2024-06-15");
        let second = verification_hash("e1", "c1", "2024-06-15");
        assert_eq!(first, second);
        assert!(is_lower_hex_16(&first));
    }

    #[test]
    fn test_hash_is_sensitive_to_date_serialization() {
        let plain = verification_hash("e1", "c1", "2024-06-15");
        let iso = verification_hash("e1", "c1", "2024-06-15T00:00:00.000Z");
        assert_ne!(plain, iso);
    }

    #[test]
    fn test_issue_then_verify() {
        let date = CompletionDate::from(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let issued = use_case()
            .execute(IssueCertificateInput {
                enrollment_id: "enr-1".into(),
                course_id: "6660aa01bb".into(),
                student_id: "665f1c2e9b1d4a0012ab34cd".into(),
                completion_date: date.clone(),
            })
            .unwrap();

        assert_eq!(
            issued.certificate_id.as_str(),
            "MINI-665F1C2E-6660AA01-40960012-DEADBEEF"
        );
        assert_eq!(
            issued.verification_hash,
            verification_hash("enr-1", "6660aa01bb", "2024-06-15")
        );
        assert!(verify_hash(
            "enr-1",
            "6660aa01bb",
            date.as_str(),
            &issued.verification_hash.to_uppercase()
        ));
        assert!(!verify_hash(
            "enr-2",
            "6660aa01bb",
            date.as_str(),
            &issued.verification_hash
        ));
    }

    #[test]
    fn test_issue_requires_completion_date() {
        let result = use_case().execute(IssueCertificateInput {
            enrollment_id: "enr-1".into(),
            course_id: "c1".into(),
            student_id: "s1".into(),
            completion_date: CompletionDate::raw(""),
        });
        assert!(matches!(
            result,
            Err(CertificateError::MissingIdentifier("completionDate"))
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::CertificateIdGenerator;
    use crate::domain::services::verification_hash;
    use crate::presentation::router::certificate_router;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use platform::clock::FixedClock;
    use platform::crypto::FixedEntropy;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        certificate_router(Arc::new(CertificateIdGenerator::new(
            FixedClock::from_millis(1_718_409_600_123).unwrap(),
            FixedEntropy::new([0xde, 0xad, 0xbe, 0xef]),
        )))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_issue_returns_created() {
        let response = router()
            .oneshot(post_json(
                "/",
                serde_json::json!({
                    "enrollmentId": "enr-1",
                    "courseId": "6660aa01bb",
                    "studentId": "665f1c2e9b1d4a0012ab34cd",
                    "completionDate": "2024-06-15"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(
            json["certificateId"],
            "MINI-665F1C2E-6660AA01-40960012-DEADBEEF"
        );
        assert_eq!(
            json["verificationHash"],
            verification_hash("enr-1", "6660aa01bb", "2024-06-15")
        );
    }

    #[tokio::test]
    async fn test_issue_missing_student_is_bad_request() {
        let response = router()
            .oneshot(post_json(
                "/",
                serde_json::json!({
                    "enrollmentId": "enr-1",
                    "courseId": "6660aa01bb",
                    "completionDate": "2024-06-15"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "studentId is required");
    }

    #[tokio::test]
    async fn test_issue_null_student_is_bad_request() {
        let response = router()
            .oneshot(post_json(
                "/",
                serde_json::json!({
                    "enrollmentId": "enr-1",
                    "courseId": "6660aa01bb",
                    "studentId": null,
                    "completionDate": "2024-06-15"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["detail"], "studentId is required");
    }

    #[tokio::test]
    async fn test_issue_accepts_numeric_identifiers() {
        let response = router()
            .oneshot(post_json(
                "/",
                serde_json::json!({
                    "enrollmentId": 7,
                    "courseId": 12345678,
                    "studentId": "665f1c2e9b1d4a0012ab34cd",
                    "completionDate": "2024-06-15"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(
            json["certificateId"],
            "MINI-665F1C2E-12345678-40960012-DEADBEEF"
        );
        assert_eq!(
            json["verificationHash"],
            verification_hash("7", "12345678", "2024-06-15")
        );
    }

    #[tokio::test]
    async fn test_issue_rejects_structured_identifier() {
        let response = router()
            .oneshot(post_json(
                "/",
                serde_json::json!({
                    "enrollmentId": "enr-1",
                    "courseId": { "id": "6660aa01bb" },
                    "studentId": "665f1c2e9b1d4a0012ab34cd",
                    "completionDate": "2024-06-15"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["detail"], "courseId must be a string");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        for uri in ["/", "/verify"] {
            let response = router()
                .oneshot(
                    Request::post(uri)
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from("{\"studentId\": "))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let json = body_json(response).await;
            assert_eq!(json["success"], false);
            assert_eq!(json["status"], 400);
        }
    }

    #[tokio::test]
    async fn test_format_check() {
        let valid = router()
            .oneshot(
                Request::get("/mini-ABCDEF12-12345678-20240615-deadbeef/format")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(valid.status(), StatusCode::OK);
        assert_eq!(
            body_json(valid).await,
            serde_json::json!({ "success": true, "valid": true })
        );

        let invalid = router()
            .oneshot(
                Request::get("/MINI-ABC-123-1-XYZ/format")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(invalid).await["valid"], false);
    }

    #[tokio::test]
    async fn test_verify_endpoint() {
        let hash = verification_hash("e1", "c1", "2024-06-15");

        let matching = router()
            .oneshot(post_json(
                "/verify",
                serde_json::json!({
                    "enrollmentId": "e1",
                    "courseId": "c1",
                    "completionDate": "2024-06-15",
                    "verificationHash": hash
                }),
            ))
            .await
            .unwrap();
        assert_eq!(matching.status(), StatusCode::OK);
        assert_eq!(body_json(matching).await["valid"], true);

        let mismatched = router()
            .oneshot(post_json(
                "/verify",
                serde_json::json!({
                    "enrollmentId": "e1",
                    "courseId": "c1",
                    "completionDate": "2024-06-16",
                    "verificationHash": hash
                }),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(mismatched).await["valid"], false);
    }
}
