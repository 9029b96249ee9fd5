//! Route definitions for the ShopSearch HTTP API.
//!
//! All versioned routes are mounted under `/api/v1` and rate limited; the
//! root and health endpoints sit outside the limiter. The error
//! normalization layer wraps everything but the security headers, so it
//! also covers the 404 fallback; the header layer sits outside it to stamp
//! error envelopes too.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/test", get(handlers::root::test_endpoint))
        .merge(product_routes())
        .merge(search_routes())
        .merge(analytics_routes())
        .merge(benchmark_routes())
        .merge(admin_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::enforce,
        ));

    Router::new()
        .route("/", get(handlers::root::api_info))
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        .fallback(handlers::root::not_found)
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&state.config.server.cors))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::normalize::normalize_errors,
        ))
        .layer(axum_middleware::from_fn(
            middleware::security::security_headers,
        ))
        .with_state(state)
}

/// Product endpoints (Phase 3 stubs).
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", any(handlers::products::products_stub))
        .route("/products/{id}", get(handlers::products::get_product))
}

/// Search endpoints (Phase 4-5 stubs).
fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search::search_products))
        .route("/search/{*rest}", any(handlers::search::search_stub))
}

/// Analytics endpoints (Phase 7 stubs).
fn analytics_routes() -> Router<AppState> {
    Router::new().route("/analytics", any(handlers::analytics::analytics_stub))
}

/// Benchmark endpoints (Phase 6 stubs).
fn benchmark_routes() -> Router<AppState> {
    Router::new().route("/benchmark", any(handlers::benchmark::benchmark_stub))
}

/// Admin endpoints: health is live, everything else is a Phase 7 stub.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/health", get(handlers::admin::admin_health))
        .route("/admin", any(handlers::admin::admin_stub))
        .route("/admin/{*rest}", any(handlers::admin::admin_stub))
}
