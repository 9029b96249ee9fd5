//! Benchmark route stubs (Phase 6).

use axum::Json;

use crate::error::ApiResult;

use super::phase_stub;

/// Catch-all for /api/v1/benchmark.
pub async fn benchmark_stub() -> ApiResult<Json<serde_json::Value>> {
    Err(phase_stub("Benchmark routes will be implemented in Phase 6"))
}
