//! Analytics route stubs (Phase 7).

use axum::Json;

use crate::error::ApiResult;

use super::phase_stub;

/// Catch-all for /api/v1/analytics.
pub async fn analytics_stub() -> ApiResult<Json<serde_json::Value>> {
    Err(phase_stub("Analytics routes will be implemented in Phase 7"))
}
