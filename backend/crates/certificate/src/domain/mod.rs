//! Domain Layer
//!
//! Value objects and pure certificate services.

pub mod services;
pub mod value_objects;

pub use value_objects::{CertificateId, CompletionDate};
