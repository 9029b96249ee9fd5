//! Unified application error types for ShopSearch.
//!
//! All crates map their internal failures into [`AppError`] for consistent
//! propagation through the ? operator. Each failure carries an [`ErrorKind`]
//! discriminator; the HTTP layer classifies errors by matching on the kind,
//! never by inspecting type names or message text.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// Kinds are mutually exclusive by construction, so classification is a
/// single exhaustive `match` rather than an ordered rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A data-layer validation failure with per-field detail.
    DataValidation,
    /// A uniqueness constraint was violated (duplicate key).
    UniqueViolation,
    /// A generic database failure.
    Database,
    /// The Elasticsearch cluster returned or caused a failure.
    SearchEngine,
    /// Request-level input validation failed.
    RequestValidation,
    /// The supplied credential token is malformed or has a bad signature.
    InvalidToken,
    /// The supplied credential token has expired.
    TokenExpired,
    /// A path or query identifier could not be parsed into its target type.
    Cast,
    /// Anything else; carries its own status code when one was declared.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataValidation => write!(f, "DATA_VALIDATION"),
            Self::UniqueViolation => write!(f, "UNIQUE_VIOLATION"),
            Self::Database => write!(f, "DATABASE"),
            Self::SearchEngine => write!(f, "SEARCH_ENGINE"),
            Self::RequestValidation => write!(f, "REQUEST_VALIDATION"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::Cast => write!(f, "CAST"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// A single field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    /// The offending field name.
    pub field: String,
    /// What went wrong with it.
    pub message: String,
}

impl FieldError {
    /// Creates a new field-level issue.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The unified application error used throughout ShopSearch.
///
/// Collaborator errors (sqlx, reqwest, jsonwebtoken, validator) are mapped
/// into `AppError` at the crate boundary that owns them. This provides a
/// single error type for the entire application.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Internal human-readable detail (may differ from the client-visible message).
    pub message: String,
    /// Per-field issues; non-empty only for [`ErrorKind::DataValidation`].
    pub field_errors: Vec<FieldError>,
    /// Explicit HTTP status for [`ErrorKind::Other`] failures that declare one.
    pub status: Option<u16>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
            status: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: Vec::new(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a data-layer validation error carrying per-field issues.
    ///
    /// The list order is preserved all the way into the response body.
    pub fn validation_fields(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self {
            kind: ErrorKind::DataValidation,
            message: message.into(),
            field_errors: fields,
            status: None,
            source: None,
        }
    }

    /// Create a uniqueness-violation error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UniqueViolation, message)
    }

    /// Create a generic database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a search-engine error.
    pub fn search_engine(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SearchEngine, message)
    }

    /// Create a request-validation error.
    pub fn request_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestValidation, message)
    }

    /// Create a malformed-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Create an expired-token error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// Create an identifier-cast error for a field that failed to parse.
    pub fn cast(field: impl fmt::Display, value: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Cast, format!("Invalid {field}: {value}"))
    }

    /// Create an unclassified error with an explicit HTTP status code.
    ///
    /// This is the typed escape hatch for handlers that want to signal a
    /// domain-specific failure (e.g. not-found) without a dedicated kind.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Other,
            message: message.into(),
            field_errors: Vec::new(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(404, message)
    }

    /// Create an internal error (500, unclassified).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, message)
    }

    /// Create a configuration error (unclassified, 500).
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, message)
    }

    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self.kind {
            ErrorKind::DataValidation | ErrorKind::RequestValidation | ErrorKind::Cast => 400,
            ErrorKind::UniqueViolation => 409,
            ErrorKind::Database | ErrorKind::SearchEngine => 500,
            ErrorKind::InvalidToken | ErrorKind::TokenExpired => 401,
            ErrorKind::Other => self.status.unwrap_or(500),
        }
    }

    /// The client-visible message for this error.
    ///
    /// Canonical per kind; only `Cast` and `Other` expose their own text.
    pub fn public_message(&self) -> String {
        match self.kind {
            ErrorKind::DataValidation => "Validation error".to_string(),
            ErrorKind::UniqueViolation => "Resource already exists".to_string(),
            ErrorKind::Database => "Database error".to_string(),
            ErrorKind::SearchEngine => "Elasticsearch error".to_string(),
            ErrorKind::RequestValidation => "Validation failed".to_string(),
            ErrorKind::InvalidToken => "Invalid token".to_string(),
            ErrorKind::TokenExpired => "Token expired".to_string(),
            ErrorKind::Cast => self.message.clone(),
            ErrorKind::Other => {
                if self.message.is_empty() {
                    "Internal Server Error".to_string()
                } else {
                    self.message.clone()
                }
            }
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            field_errors: self.field_errors.clone(),
            status: self.status,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Other,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Other, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Other,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            AppError::validation_fields("bad", vec![]).status_code(),
            400
        );
        assert_eq!(AppError::conflict("duplicate key").status_code(), 409);
        assert_eq!(AppError::database("down").status_code(), 500);
        assert_eq!(AppError::search_engine("timeout").status_code(), 500);
        assert_eq!(AppError::request_validation("bad query").status_code(), 400);
        assert_eq!(AppError::invalid_token("garbage").status_code(), 401);
        assert_eq!(AppError::token_expired("old").status_code(), 401);
        assert_eq!(AppError::cast("id", "abc").status_code(), 400);
    }

    #[test]
    fn unclassified_defaults_to_500_unless_declared() {
        assert_eq!(AppError::internal("boom").status_code(), 500);
        assert_eq!(AppError::with_status(404, "gone").status_code(), 404);
        assert_eq!(AppError::not_found("no such product").status_code(), 404);
    }

    #[test]
    fn cast_message_embeds_field_and_value() {
        let err = AppError::cast("id", "abc");
        assert_eq!(err.public_message(), "Invalid id: abc");
    }

    #[test]
    fn public_messages_are_canonical() {
        assert_eq!(
            AppError::conflict("duplicate key").public_message(),
            "Resource already exists"
        );
        assert_eq!(
            AppError::database("connection reset").public_message(),
            "Database error"
        );
        assert_eq!(
            AppError::search_engine("shard failure").public_message(),
            "Elasticsearch error"
        );
    }

    #[test]
    fn unclassified_falls_back_to_generic_message() {
        assert_eq!(AppError::internal("boom").public_message(), "boom");
        assert_eq!(
            AppError::internal("").public_message(),
            "Internal Server Error"
        );
    }

    #[test]
    fn field_errors_keep_their_order() {
        let err = AppError::validation_fields(
            "model validation",
            vec![
                FieldError::new("name", "required"),
                FieldError::new("price", "must be positive"),
                FieldError::new("sku", "too long"),
            ],
        );
        let fields: Vec<&str> = err.field_errors.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["name", "price", "sku"]);
    }
}
