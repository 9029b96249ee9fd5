//! Token bucket rate limiter middleware.
//!
//! Applied to `/api/v1` routes only; the public health endpoint stays
//! unthrottled.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use shopsearch_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Bucket-map size at which stale entries get pruned.
const PRUNE_THRESHOLD: usize = 1024;

/// Simple in-memory token bucket rate limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Client key → bucket state.
    buckets: Arc<Mutex<HashMap<String, TokenBucket>>>,
    /// Maximum tokens per bucket.
    max_tokens: u32,
    /// Token refill rate per second.
    refill_rate: f64,
}

#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_tokens: u32, refill_rate: f64) -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
            max_tokens,
            refill_rate,
        }
    }

    /// Attempts to consume a token for the given key.
    pub async fn check(&self, key: &str) -> bool {
        let mut buckets = self.buckets.lock().await;
        let now = Instant::now();

        if buckets.len() >= PRUNE_THRESHOLD {
            Self::prune(&mut buckets, now, self.idle_ttl());
        }

        let bucket = buckets.entry(key.to_string()).or_insert(TokenBucket {
            tokens: self.max_tokens as f64,
            last_refill: now,
        });

        // Refill tokens
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_rate).min(self.max_tokens as f64);
        bucket.last_refill = now;

        // Try to consume
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// How long a bucket may sit idle before it is dropped.
    ///
    /// A bucket idle long enough to refill completely holds no state worth
    /// keeping; the next request recreates it full.
    fn idle_ttl(&self) -> Duration {
        if self.refill_rate > 0.0 {
            let secs = (self.max_tokens as f64 / self.refill_rate).ceil() as u64;
            Duration::from_secs(secs.clamp(60, 3600))
        } else {
            Duration::from_secs(3600)
        }
    }

    fn prune(buckets: &mut HashMap<String, TokenBucket>, now: Instant, ttl: Duration) {
        buckets.retain(|_, bucket| now.duration_since(bucket.last_refill) < ttl);
    }
}

/// Rejects requests once the caller's bucket is exhausted.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let key = client_key(&request, state.config.rate_limit.trust_proxy);

    if state.rate_limiter.check(&key).await {
        next.run(request).await
    } else {
        ApiError(AppError::with_status(
            429,
            "Too many requests from this IP, please try again later.",
        ))
        .into_response()
    }
}

/// Client identity for bucketing: the peer address, unless configuration
/// says a trusted proxy fills in `x-forwarded-for`.
///
/// The header is never consulted by default: it is client-controlled, and
/// keying on it would let any caller reset its own bucket per request.
fn client_key(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(forwarded) = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
