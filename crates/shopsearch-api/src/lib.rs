//! # shopsearch-api
//!
//! HTTP API layer for ShopSearch built on Axum.
//!
//! Provides the route table, middleware (CORS, compression, rate limiting,
//! request logging, terminal error normalization), extractors, DTOs, and
//! the error response normalizer that turns every failure into the uniform
//! JSON envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod token;

pub use error::{ApiError, ApiResult, ErrorEnvelope, ErrorNormalizer};
pub use router::build_router;
pub use state::AppState;
