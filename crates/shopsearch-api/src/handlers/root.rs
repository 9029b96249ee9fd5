//! Root, routing smoke test, and 404 fallback handlers.

use axum::Json;
use axum::http::{Method, Uri};

use shopsearch_core::error::AppError;

use crate::error::ApiError;

/// GET / — API information.
pub async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "E-Commerce Search API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Comparing Elasticsearch vs SQL search performance",
        "endpoints": {
            "health": "/health",
            "admin_health": "/api/v1/admin/health",
            "api": "/api/v1",
        },
        "features": [
            "Dual search engines (SQL & Elasticsearch)",
            "Performance comparison",
            "Real-time analytics",
            "Advanced filtering",
            "Autocomplete",
        ],
    }))
}

/// GET /api/v1/test — verifies that routing works.
pub async fn test_endpoint() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "API routes are working!",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "v1",
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError(AppError::with_status(
        404,
        format!("Route {} {} not found", method, uri.path()),
    ))
}
