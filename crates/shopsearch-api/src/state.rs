//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use shopsearch_core::config::AppConfig;
use shopsearch_database::DatabasePool;
use shopsearch_search::EsClient;

use crate::error::ErrorNormalizer;
use crate::middleware::rate_limit::RateLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Error response normalizer, fixed to the configured environment.
    pub normalizer: Arc<ErrorNormalizer>,
    /// PostgreSQL connection pool.
    pub db: DatabasePool,
    /// Elasticsearch client.
    pub es: EsClient,
    /// Per-IP token bucket rate limiter.
    pub rate_limiter: RateLimiter,
    /// Process start time, reported by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// Assemble the state from configuration and initialized clients.
    pub fn new(config: AppConfig, db: DatabasePool, es: EsClient) -> Self {
        let normalizer = Arc::new(ErrorNormalizer::new(config.is_development()));
        let rate_limiter = RateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.refill_rate(),
        );

        Self {
            config: Arc::new(config),
            normalizer,
            db,
            es,
            rate_limiter,
            started_at: Instant::now(),
        }
    }
}
