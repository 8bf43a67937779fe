//! Cookie Management Infrastructure
//!
//! Set-Cookie construction and request cookie lookup.

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// IMF-fixdate, the format `Expires` requires
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format an instant as an HTTP date (`Sat, 22 Jun 2024 00:00:00 GMT`)
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format(HTTP_DATE_FORMAT).to_string()
}

/// Cookie attributes
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub expires: Option<DateTime<Utc>>,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            expires: None,
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
        if let Some(expires) = self.expires {
            parts.push(format!("Expires={}", http_date(expires)));
        }
        if let Some(max_age) = self.max_age_secs {
            parts.push(format!("Max-Age={}", max_age));
        }
        if self.secure {
            parts.push("Secure".to_string());
        }

        parts.join("; ")
    }

    /// Build Set-Cookie header that makes the browser drop the cookie
    pub fn build_delete_cookie(&self) -> String {
        Self {
            expires: DateTime::from_timestamp(0, 0),
            max_age_secs: Some(0),
            ..self.clone()
        }
        .build_set_cookie("")
    }
}

/// Extract a cookie value from headers
///
/// Browsers send a single `Cookie` header, but proxies and HTTP/2 may split
/// it, so every occurrence is scanned.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}
