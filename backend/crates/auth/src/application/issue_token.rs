//! Issue Token Use Case
//!
//! Signs and verifies stateless HS256 session tokens.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use platform::clock::Clock;
use std::sync::Arc;

use crate::application::config::TokenConfig;
use crate::domain::entity::session_claims::SessionClaims;
use crate::error::{AuthError, AuthResult};

/// Token issuer
///
/// Holds the keys derived from the configured secret. `TokenConfig` can only
/// be built with a non-blank secret, so every issuer can sign.
pub struct TokenIssuer<C: Clock> {
    config: Arc<TokenConfig>,
    clock: C,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<C: Clock> TokenIssuer<C> {
    pub fn new(config: Arc<TokenConfig>, clock: C) -> Self {
        let secret = config.jwt_secret().expose();
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);

        // Expiry is checked against the injected clock in `verify`
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            clock,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Sign a token for `user_id`
    ///
    /// The identifier is embedded as-is.
    pub fn sign(&self, user_id: &str) -> AuthResult<String> {
        let claims = self.claims_for(user_id)?;
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                AuthError::SessionInvalid
            })?;

        if data.claims.is_expired_at(self.clock.now()) {
            return Err(AuthError::SessionExpired);
        }

        Ok(data.claims)
    }

    fn claims_for(&self, user_id: &str) -> AuthResult<SessionClaims> {
        let iat = self.clock.now().timestamp();
        let exp = iat
            .checked_add(self.config.token_lifetime().as_secs())
            .ok_or_else(|| AuthError::Internal("token expiry overflow".to_string()))?;

        Ok(SessionClaims {
            sub: user_id.to_string(),
            iat,
            exp,
        })
    }
}
