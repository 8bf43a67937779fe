//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every backend crate agrees on:
//! - [`error::app_error::AppError`], the client-facing error
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//! - The axum response rendering (`axum` feature)
//!
//! Domain crates (`auth`, `certificate`) keep their own `thiserror` enums and
//! convert into `AppError` at the presentation boundary.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

pub use error::app_error::AppError;
pub use error::kind::ErrorKind;
