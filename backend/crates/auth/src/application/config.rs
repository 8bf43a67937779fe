//! Application Configuration
//!
//! Token and cookie settings, built once at startup and shared by `Arc`.

use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Display;
use platform::cookie::CookieConfig;
use platform::secret::SecretBytes;

use crate::domain::value_object::token_lifetime::TokenLifetime;
use crate::error::{AuthError, AuthResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_JWT_EXPIRE: &str = "JWT_EXPIRE";
pub const ENV_JWT_COOKIE_EXPIRE: &str = "JWT_COOKIE_EXPIRE";
pub const ENV_NODE_ENV: &str = "NODE_ENV";

pub const DEFAULT_COOKIE_NAME: &str = "token";
pub const DEFAULT_COOKIE_EXPIRE_DAYS: i64 = 7;
const MAX_COOKIE_EXPIRE_DAYS: i64 = 36_500;

/// Deployment environment, from `NODE_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Environment {
    #[default]
    #[display("development")]
    Development,
    #[display("test")]
    Test,
    #[display("production")]
    Production,
}

impl Environment {
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("production") => Environment::Production,
            Some("test") => Environment::Test,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Session token configuration
///
/// The token lifetime (`JWT_EXPIRE`) and the cookie lifetime
/// (`JWT_COOKIE_EXPIRE`) are configured separately. Deployments that want
/// the browser to drop the cookie exactly when the token stops verifying
/// must set them to the same span.
///
/// Fields are only reachable through the checked constructors, so a
/// `TokenConfig` always holds a usable secret and in-range lifetimes.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Session cookie name
    cookie_name: String,
    /// HMAC signing secret
    jwt_secret: SecretBytes,
    /// Lifetime of the signed token
    token_lifetime: TokenLifetime,
    /// Lifetime of the cookie carrying the token, in days
    cookie_expire_days: i64,
    environment: Environment,
    cookie_same_site: SameSite,
}

impl TokenConfig {
    /// Config with defaults and the given secret
    pub fn new(jwt_secret: impl Into<SecretBytes>) -> AuthResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_blank() {
            return Err(AuthError::MissingSecret);
        }
        Ok(Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            jwt_secret,
            token_lifetime: TokenLifetime::default(),
            cookie_expire_days: DEFAULT_COOKIE_EXPIRE_DAYS,
            environment: Environment::default(),
            cookie_same_site: SameSite::Lax,
        })
    }

    /// Read the process environment
    pub fn from_env() -> AuthResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup(ENV_JWT_SECRET).unwrap_or_default())?;

        if let Some(raw) = lookup(ENV_JWT_EXPIRE) {
            config.token_lifetime = TokenLifetime::parse(&raw)
                .map_err(|e| AuthError::InvalidConfig(format!("{ENV_JWT_EXPIRE}: {e}")))?;
        }

        if let Some(raw) = lookup(ENV_JWT_COOKIE_EXPIRE) {
            config.cookie_expire_days = parse_cookie_days(&raw)?;
        }

        config.environment = Environment::from_node_env(lookup(ENV_NODE_ENV).as_deref());

        if config.lifetimes_diverge() {
            tracing::warn!(
                token_lifetime_ms = config.token_lifetime.as_millis(),
                cookie_expire_days = config.cookie_expire_days,
                "Token and cookie lifetimes differ"
            );
        }

        Ok(config)
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_token_lifetime(mut self, token_lifetime: TokenLifetime) -> Self {
        self.token_lifetime = token_lifetime;
        self
    }

    /// Same bounds as `JWT_COOKIE_EXPIRE`
    pub fn with_cookie_expire_days(mut self, days: i64) -> AuthResult<Self> {
        self.cookie_expire_days = check_cookie_days(days)?;
        Ok(self)
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn jwt_secret(&self) -> &SecretBytes {
        &self.jwt_secret
    }

    pub fn token_lifetime(&self) -> TokenLifetime {
        self.token_lifetime
    }

    pub fn cookie_expire_days(&self) -> i64 {
        self.cookie_expire_days
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// `Secure` is only set in production
    pub fn cookie_secure(&self) -> bool {
        self.environment.is_production()
    }

    pub fn cookie_lifetime(&self) -> TimeDelta {
        TimeDelta::days(self.cookie_expire_days)
    }

    pub fn lifetimes_diverge(&self) -> bool {
        self.token_lifetime.as_time_delta() != self.cookie_lifetime()
    }

    /// Cookie attributes for a session cookie expiring at `expires`
    pub fn session_cookie(&self, expires: DateTime<Utc>) -> CookieConfig {
        CookieConfig {
            expires: Some(expires),
            ..self.base_cookie()
        }
    }

    /// Set-Cookie value that removes the session cookie
    pub fn clear_cookie(&self) -> String {
        self.base_cookie().build_delete_cookie()
    }

    fn base_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure(),
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            expires: None,
            max_age_secs: None,
        }
    }
}

fn parse_cookie_days(raw: &str) -> AuthResult<i64> {
    let days: i64 = raw.trim().parse().map_err(|_| {
        AuthError::InvalidConfig(format!(
            "{ENV_JWT_COOKIE_EXPIRE}: {raw:?} is not a number of days"
        ))
    })?;
    check_cookie_days(days)
}

// Upper bound keeps `now + days` inside chrono's range
fn check_cookie_days(days: i64) -> AuthResult<i64> {
    if !(1..=MAX_COOKIE_EXPIRE_DAYS).contains(&days) {
        return Err(AuthError::InvalidConfig(format!(
            "{ENV_JWT_COOKIE_EXPIRE}: {days} is outside 1..={MAX_COOKIE_EXPIRE_DAYS} days"
        )));
    }
    Ok(days)
}
