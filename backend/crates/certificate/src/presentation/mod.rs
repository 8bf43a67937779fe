//! Presentation Layer
//!
//! HTTP handlers and DTOs for the API.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::certificate_router;
