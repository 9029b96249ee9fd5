//! Admin handlers: detailed health is real, the rest is Phase 7.

use axum::Json;
use axum::extract::State;

use shopsearch_core::error::AppError;

use crate::dto::response::AdminHealthResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

use super::phase_stub;

/// GET /api/v1/admin/health — probes both collaborators.
///
/// An unreachable collaborator yields a 503 envelope naming which probes
/// failed; a healthy system reports both as connected.
pub async fn admin_health(
    State(state): State<AppState>,
) -> ApiResult<Json<AdminHealthResponse>> {
    let database = match state.db.health_check().await {
        Ok(true) => "connected",
        _ => "unavailable",
    };
    let elasticsearch = match state.es.ping().await {
        Ok(true) => "connected",
        _ => "unavailable",
    };

    if database != "connected" || elasticsearch != "connected" {
        return Err(ApiError(AppError::with_status(
            503,
            format!("Service degraded: database {database}, elasticsearch {elasticsearch}"),
        )));
    }

    Ok(Json(AdminHealthResponse {
        success: true,
        status: "OK".to_string(),
        database: database.to_string(),
        elasticsearch: elasticsearch.to_string(),
    }))
}

/// Catch-all for the rest of /api/v1/admin.
pub async fn admin_stub() -> ApiResult<Json<serde_json::Value>> {
    Err(phase_stub("Admin routes will be implemented in Phase 7"))
}
