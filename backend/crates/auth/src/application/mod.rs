//! Application Layer
//!
//! Configuration and use cases.

pub mod config;
pub mod deliver_session;
pub mod issue_token;

// Re-exports
pub use config::{Environment, TokenConfig};
pub use deliver_session::{DeliverSessionUseCase, SessionResponse};
pub use issue_token::TokenIssuer;
