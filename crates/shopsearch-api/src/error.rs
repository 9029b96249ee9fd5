//! Error response normalization.
//!
//! Every failure surfaced during request handling funnels into
//! [`ErrorNormalizer`], which maps an [`AppError`] to a deterministic
//! `(status, envelope)` pair and logs it. Handlers return [`ApiResult`] and
//! forward failures with `?`; they never format error responses themselves.

use std::sync::Arc;

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use shopsearch_core::error::{AppError, ErrorKind, FieldError};

/// The uniform JSON error body returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false` for error responses.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Per-field issues; present only for data-layer validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    /// Diagnostic detail; present only in development configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Development-only diagnostic block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// The error kind discriminator.
    pub name: String,
    /// The rendered source-error chain.
    pub stack: String,
}

/// Maps application errors to HTTP responses.
///
/// The debug flag is taken from configuration at construction time rather
/// than read from ambient process state, so the mapping stays pure and
/// testable: same error plus same flag always yields the same output.
#[derive(Debug, Clone)]
pub struct ErrorNormalizer {
    debug: bool,
}

impl ErrorNormalizer {
    /// Create a normalizer. `debug` should be true only in development.
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Produce the response status and envelope for a failure.
    ///
    /// Also logs message, path, and method; the source chain is included
    /// only in debug mode.
    pub fn normalize(
        &self,
        err: &AppError,
        method: &Method,
        path: &str,
    ) -> (StatusCode, ErrorEnvelope) {
        if self.debug {
            tracing::error!(
                method = %method,
                path = %path,
                kind = %err.kind,
                message = %err.message,
                stack = %render_chain(err),
                "Request failed"
            );
        } else {
            tracing::error!(
                method = %method,
                path = %path,
                kind = %err.kind,
                message = %err.message,
                "Request failed"
            );
        }

        let detail = self.debug.then(|| ErrorDetail {
            name: err.kind.to_string(),
            stack: render_chain(err),
        });

        (status_of(err), envelope_of(err, detail))
    }
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn envelope_of(err: &AppError, detail: Option<ErrorDetail>) -> ErrorEnvelope {
    let errors = match err.kind {
        ErrorKind::DataValidation => Some(err.field_errors.clone()),
        _ => None,
    };

    ErrorEnvelope {
        success: false,
        message: err.public_message(),
        errors,
        error: detail,
    }
}

/// Render the full cause chain of an error, outermost first.
fn render_chain(err: &AppError) -> String {
    use std::error::Error;

    let mut out = format!("{}: {}", err.kind, err.message);
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\n    caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Axum-facing wrapper around [`AppError`].
///
/// Any `Result<_, ApiError>` handler forwards its failure here; the
/// rendered response carries a diagnostic-free envelope, and the original
/// error rides along in the response extensions so the terminal middleware
/// can re-render it through the configured normalizer with request context.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Handler result type for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;

/// Response extension carrying the error for the terminal middleware.
#[derive(Debug, Clone)]
pub(crate) struct PendingError(pub(crate) Arc<AppError>);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let envelope = envelope_of(&err, None);
        let mut response = (status_of(&err), Json(envelope)).into_response();
        response.extensions_mut().insert(PendingError(Arc::new(err)));
        response
    }
}
