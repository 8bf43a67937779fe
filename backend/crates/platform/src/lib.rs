//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Injectable time source ([`clock::Clock`])
//! - Injectable randomness and hashing helpers ([`crypto`])
//! - Zeroize-on-drop secret storage ([`secret::SecretBytes`])
//! - Cookie building and extraction ([`cookie`])

pub mod clock;
pub mod cookie;
pub mod crypto;
pub mod secret;
