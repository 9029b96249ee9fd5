//! # shopsearch-search
//!
//! Elasticsearch client for ShopSearch. Speaks the cluster REST API over
//! `reqwest` and maps every transport or response failure into the
//! application error taxonomy. Search queries themselves arrive in a later
//! phase; this crate currently owns connectivity and index administration.

pub mod client;
pub mod error;

pub use client::{ClusterInfo, EsClient, IndexStats};
