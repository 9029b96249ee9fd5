//! Maps sqlx failures into the application error taxonomy.

use shopsearch_core::error::{AppError, FieldError};

/// Convert a sqlx error into an [`AppError`].
///
/// Constraint violations keep their specific kinds (uniqueness → conflict,
/// check/not-null/foreign-key → data validation with the offending
/// constraint as the field); everything else is a generic database error.
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    let mut mapped = match &err {
        sqlx::Error::Database(db) => match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation => AppError::conflict(db.message()),
            sqlx::error::ErrorKind::NotNullViolation
            | sqlx::error::ErrorKind::CheckViolation
            | sqlx::error::ErrorKind::ForeignKeyViolation => AppError::validation_fields(
                db.message(),
                vec![FieldError::new(
                    db.constraint().unwrap_or("unknown"),
                    db.message(),
                )],
            ),
            _ => AppError::database(db.message()),
        },
        sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
        other => AppError::database(other.to_string()),
    };
    mapped.source = Some(Box::new(err));
    mapped
}
