//! Product route stubs (Phase 3).

use axum::Json;
use axum::extract::Path;

use crate::error::ApiResult;
use crate::extractors::parse_uuid;

use super::phase_stub;

const PHASE_MESSAGE: &str = "Product routes will be implemented in Phase 3";

/// Catch-all for /api/v1/products.
pub async fn products_stub() -> ApiResult<Json<serde_json::Value>> {
    Err(phase_stub(PHASE_MESSAGE))
}

/// GET /api/v1/products/{id} — validates the identifier, then stubs.
pub async fn get_product(Path(id): Path<String>) -> ApiResult<Json<serde_json::Value>> {
    let _id = parse_uuid(&id)?;
    Err(phase_stub(PHASE_MESSAGE))
}
