//! Terminal error-normalization middleware.
//!
//! Last-chance translation from internal failures to the uniform envelope.
//! Failed handlers stash their [`AppError`] in the response extensions (see
//! [`crate::error::ApiError`]); this middleware picks it up and re-renders
//! it through the configured normalizer, which knows the request's method
//! and path and whether diagnostics may be exposed.

use axum::Json;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::PendingError;
use crate::state::AppState;

/// Re-renders any failed response through the error normalizer.
pub async fn normalize_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    if let Some(PendingError(err)) = response.extensions_mut().remove::<PendingError>() {
        let (status, envelope) = state.normalizer.normalize(&err, &method, &path);
        return (status, Json(envelope)).into_response();
    }

    response
}
