//! Certificate Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::clock::Clock;
use platform::crypto::EntropySource;
use std::sync::Arc;

use crate::application::CertificateIdGenerator;
use crate::presentation::handlers::{self, CertificateAppState};

/// Create the certificate router
pub fn certificate_router<C, E>(generator: Arc<CertificateIdGenerator<C, E>>) -> Router
where
    C: Clock + 'static,
    E: EntropySource + 'static,
{
    let state = CertificateAppState { generator };

    Router::new()
        .route("/", post(handlers::issue_certificate::<C, E>))
        .route("/verify", post(handlers::verify))
        .route("/{certificate_id}/format", get(handlers::check_format))
        .with_state(state)
}
