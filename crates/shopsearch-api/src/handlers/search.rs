//! Search route stubs (Phase 4-5).

use axum::Json;

use crate::dto::request::SearchQueryParams;
use crate::error::ApiResult;
use crate::extractors::ValidatedQuery;

use super::phase_stub;

const PHASE_MESSAGE: &str = "Search routes will be implemented in Phase 4-5";

/// GET /api/v1/search — validates the parameter contract, then stubs.
pub async fn search_products(
    ValidatedQuery(_params): ValidatedQuery<SearchQueryParams>,
) -> ApiResult<Json<serde_json::Value>> {
    Err(phase_stub(PHASE_MESSAGE))
}

/// Catch-all for the rest of /api/v1/search.
pub async fn search_stub() -> ApiResult<Json<serde_json::Value>> {
    Err(phase_stub(PHASE_MESSAGE))
}
