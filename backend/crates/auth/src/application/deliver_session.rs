//! Deliver Session Use Case
//!
//! Issues a token for an authenticated user and packages it as the
//! `token` cookie plus the sanitized profile body.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use platform::clock::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::issue_token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Profile fields a client may see. Nothing else from `User` is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Empty string when the user has no avatar
    pub avatar: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            avatar: user.avatar.clone().unwrap_or_default(),
        }
    }
}

/// Body sent alongside the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBody {
    pub success: bool,
    pub user: PublicUser,
}

/// Response produced for a freshly authenticated user
#[derive(Debug, Clone)]
pub struct SessionResponse {
    pub status: StatusCode,
    /// Set-Cookie header value
    pub set_cookie: String,
    pub cookie_expires_at: DateTime<Utc>,
    pub body: SessionBody,
}

impl IntoResponse for SessionResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::SET_COOKIE, self.set_cookie)],
            Json(self.body),
        )
            .into_response()
    }
}

/// Deliver Session Use Case
pub struct DeliverSessionUseCase<C: Clock> {
    issuer: Arc<TokenIssuer<C>>,
}

impl<C: Clock> DeliverSessionUseCase<C> {
    pub fn new(issuer: Arc<TokenIssuer<C>>) -> Self {
        Self { issuer }
    }

    /// Sign a token for `user` and build the response with `status`
    pub fn execute(&self, user: &User, status: StatusCode) -> AuthResult<SessionResponse> {
        let token = self.issuer.sign(&user.id)?;

        let config = self.issuer.config();
        let cookie_expires_at = self
            .issuer
            .clock()
            .now()
            .checked_add_signed(config.cookie_lifetime())
            .ok_or_else(|| AuthError::Internal("cookie expiry overflow".to_string()))?;

        let set_cookie = config
            .session_cookie(cookie_expires_at)
            .build_set_cookie(&token);

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            status = status.as_u16(),
            "Session issued"
        );

        Ok(SessionResponse {
            status,
            set_cookie,
            cookie_expires_at,
            body: SessionBody {
                success: true,
                user: PublicUser::from(user),
            },
        })
    }
}
