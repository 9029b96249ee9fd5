//! Elasticsearch client configuration.

use serde::{Deserialize, Serialize};

/// Elasticsearch connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticsearchConfig {
    /// Node URL, e.g. `http://localhost:9200`.
    #[serde(default = "default_node")]
    pub node: String,
    /// Default index for product documents.
    #[serde(default = "default_index")]
    pub index: String,
    /// Basic-auth username, if the cluster requires authentication.
    #[serde(default)]
    pub username: Option<String>,
    /// Basic-auth password.
    #[serde(default)]
    pub password: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// How many times to retry a request after a connect/timeout failure.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            node: default_node(),
            index: default_index(),
            username: None,
            password: None,
            request_timeout_seconds: default_request_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_node() -> String {
    "http://localhost:9200".to_string()
}

fn default_index() -> String {
    "products".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}
