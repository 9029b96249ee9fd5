//! Validated query extraction.
//!
//! Wraps `axum::extract::Query` and runs `validator` rules on the
//! deserialized value; any failure classifies as a request-validation
//! error (400, "Validation failed").

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use shopsearch_core::error::AppError;

use crate::error::ApiError;

/// Query extractor that enforces `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError(AppError::request_validation(e.to_string())))?;

        value
            .validate()
            .map_err(|e| ApiError(map_validation_errors(e)))?;

        Ok(Self(value))
    }
}

/// Flatten `validator` errors into a single request-validation failure.
pub fn map_validation_errors(errors: validator::ValidationErrors) -> AppError {
    let mut parts: Vec<String> = Vec::new();
    for (field, issues) in errors.field_errors() {
        for issue in issues {
            let detail = issue
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| issue.code.to_string());
            parts.push(format!("{field}: {detail}"));
        }
    }
    parts.sort();

    let mut mapped = AppError::request_validation(parts.join("; "));
    mapped.source = Some(Box::new(errors));
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsearch_core::ErrorKind;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Params {
        #[validate(length(min = 1, max = 200))]
        q: String,
    }

    #[test]
    fn rule_violations_map_to_request_validation() {
        let params = Params { q: String::new() };
        let errors = params.validate().unwrap_err();
        let mapped = map_validation_errors(errors);
        assert_eq!(mapped.kind, ErrorKind::RequestValidation);
        assert_eq!(mapped.status_code(), 400);
        assert_eq!(mapped.public_message(), "Validation failed");
        assert!(mapped.message.contains("q"));
    }
}
