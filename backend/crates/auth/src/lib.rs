//! Auth (Session Token) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and value objects (user, claims, role, lifetime)
//! - `application/` - Configuration and use cases (issue token, deliver session)
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Stateless HS256 session tokens bound to a user identifier
//! - Session delivery as an `HttpOnly`, `SameSite=Lax` cookie plus a
//!   sanitized profile body
//! - Session middleware accepting the cookie or a bearer token
//!
//! ## Security Model
//! - The signing secret is mandatory; an empty secret fails at startup
//! - The cookie is `Secure` only in production
//! - Password hashes and other account fields never reach a response body

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    DeliverSessionUseCase, Environment, SessionResponse, TokenConfig, TokenIssuer,
};
pub use domain::{SessionClaims, TokenLifetime, User, UserRole};
pub use error::{AuthError, AuthResult};
pub use presentation::{CurrentUser, auth_router, require_session};
