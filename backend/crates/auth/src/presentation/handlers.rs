//! HTTP Handlers

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use platform::clock::Clock;
use std::sync::Arc;

use crate::application::issue_token::TokenIssuer;
use crate::presentation::dto::{SessionStatusResponse, SignOutResponse};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
pub struct AuthAppState<C: Clock> {
    pub issuer: Arc<TokenIssuer<C>>,
}

impl<C: Clock> Clone for AuthAppState<C> {
    fn clone(&self) -> Self {
        Self {
            issuer: self.issuer.clone(),
        }
    }
}

/// GET /api/auth/me
pub async fn session_status(
    Extension(current): Extension<CurrentUser>,
) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        success: true,
        user_id: current.user_id,
        expires_at: current.expires_at,
    })
}

/// POST /api/auth/logout
pub async fn sign_out<C>(State(state): State<AuthAppState<C>>) -> impl IntoResponse
where
    C: Clock + 'static,
{
    let cookie = state.issuer.config().clear_cookie();

    tracing::debug!("Session cookie cleared");

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignOutResponse { success: true }),
    )
}
