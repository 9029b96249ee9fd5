//! Request handlers.
//!
//! The five route groups are scaffolding: each answers 501 with its phase
//! message until the corresponding phase lands. Root, health, and the
//! routing smoke endpoint are real.

pub mod admin;
pub mod analytics;
pub mod benchmark;
pub mod health;
pub mod products;
pub mod root;
pub mod search;

use shopsearch_core::error::AppError;

use crate::error::ApiError;

/// A not-yet-implemented route group member.
pub(crate) fn phase_stub(message: &str) -> ApiError {
    ApiError(AppError::with_status(501, message))
}
