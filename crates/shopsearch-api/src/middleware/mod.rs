//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod logging;
pub mod normalize;
pub mod rate_limit;
pub mod security;
