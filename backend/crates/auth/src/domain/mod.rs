//! Domain Layer
//!
//! Entities and value objects of session issuance.

pub mod entity;
pub mod value_object;

// Re-exports
pub use entity::{session_claims::SessionClaims, user::User};
pub use value_object::{token_lifetime::TokenLifetime, user_role::UserRole};
