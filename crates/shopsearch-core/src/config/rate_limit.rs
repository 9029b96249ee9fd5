//! Rate limiting configuration.

use serde::{Deserialize, Serialize};

/// Token-bucket rate limiting configuration.
///
/// Each client IP may issue `max_requests` within a `window_seconds`-long
/// window; the bucket refills continuously at `max_requests / window_seconds`
/// tokens per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests per window per client.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Window length in seconds.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
    /// Honor `x-forwarded-for` when identifying clients.
    ///
    /// Enable only behind a proxy that strips the header from incoming
    /// traffic; otherwise the client picks its own identity.
    #[serde(default)]
    pub trust_proxy: bool,
}

impl RateLimitConfig {
    /// Token refill rate per second.
    pub fn refill_rate(&self) -> f64 {
        self.max_requests as f64 / self.window_seconds.max(1) as f64
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
            trust_proxy: false,
        }
    }
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_seconds() -> u64 {
    60
}
