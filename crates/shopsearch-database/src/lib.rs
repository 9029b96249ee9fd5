//! # shopsearch-database
//!
//! PostgreSQL connection pool management and sqlx error mapping for
//! ShopSearch. The product data model arrives in a later phase; this crate
//! currently owns pool lifecycle and the database half of the error
//! taxonomy.

pub mod connection;
pub mod error;

pub use connection::DatabasePool;
pub use error::map_sqlx_error;
