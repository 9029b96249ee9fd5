//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Basic health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true for a live process.
    pub success: bool,
    /// Status string.
    pub status: String,
    /// Response timestamp, RFC 3339.
    pub timestamp: String,
    /// Process uptime in seconds.
    pub uptime_seconds: u64,
}

/// Detailed health response with collaborator probes.
///
/// Only returned when every probe succeeds; a degraded system answers with
/// a 503 error envelope instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminHealthResponse {
    /// Whether every probe succeeded.
    pub success: bool,
    /// Status string.
    pub status: String,
    /// PostgreSQL connectivity.
    pub database: String,
    /// Elasticsearch connectivity.
    pub elasticsearch: String,
}
