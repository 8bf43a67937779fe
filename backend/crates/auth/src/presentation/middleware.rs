//! Auth Middleware
//!
//! Requires a valid session token on protected routes.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use platform::clock::Clock;
use std::sync::Arc;

use crate::application::issue_token::TokenIssuer;
use crate::error::AuthError;

/// Verified caller, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// Session token from the session cookie, else from `Authorization: Bearer`
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, cookie_name).or_else(|| bearer_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

/// Middleware that requires a valid session token
pub async fn require_session<C>(
    State(issuer): State<Arc<TokenIssuer<C>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    C: Clock + 'static,
{
    let token = session_token(req.headers(), issuer.config().cookie_name())
        .ok_or(AuthError::MissingToken)?;

    let claims = issuer.verify(&token)?;
    let expires_at = claims
        .expires_at()
        .ok_or(AuthError::SessionInvalid)?;

    req.extensions_mut().insert(CurrentUser {
        user_id: claims.sub,
        expires_at,
    });

    Ok(next.run(req).await)
}
