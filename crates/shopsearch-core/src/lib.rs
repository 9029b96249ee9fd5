//! # shopsearch-core
//!
//! Core crate for the ShopSearch e-commerce search API. Contains the
//! configuration schemas and the unified error taxonomy shared by every
//! other crate.
//!
//! This crate has **no** internal dependencies on other ShopSearch crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind, FieldError};
pub use result::AppResult;
