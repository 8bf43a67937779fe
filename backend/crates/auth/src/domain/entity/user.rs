//! User Entity
//!
//! The user record handed to session delivery by the account layer. It still
//! carries the password hash, which must never leave the server.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::value_object::user_role::UserRole;

/// User entity
#[derive(Clone)]
pub struct User {
    /// Opaque identifier assigned by the account store
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Avatar URL, if the user uploaded one
    pub avatar: Option<String>,
    /// Password hash (sensitive)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            password_hash: password_hash.into(),
            created_at,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("avatar", &self.avatar)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}
