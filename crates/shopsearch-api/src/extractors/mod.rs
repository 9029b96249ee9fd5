//! Request extractors.

pub mod path;
pub mod validate;

pub use path::parse_uuid;
pub use validate::ValidatedQuery;
