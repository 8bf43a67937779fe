//! Value Object Module

pub mod token_lifetime;
pub mod user_role;
