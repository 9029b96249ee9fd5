//! Typed path parameter helpers.

use uuid::Uuid;

use shopsearch_core::error::AppError;

/// Parses a UUID from a path segment.
///
/// A malformed value classifies as an identifier-cast failure, so the
/// client sees `400 Invalid id: <value>`.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::cast("id", s))
}
