//! Elasticsearch REST client.
//!
//! Covers connectivity probes and index administration: ping, cluster info,
//! index existence/creation/deletion, statistics, and refresh.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::info;

use shopsearch_core::config::ElasticsearchConfig;
use shopsearch_core::error::AppError;

use crate::error::{map_transport_error, response_error};

/// Cluster identity as reported by `GET /`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterInfo {
    /// Cluster name.
    pub cluster_name: String,
    /// Version block.
    pub version: ClusterVersion,
}

/// Version block within [`ClusterInfo`].
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterVersion {
    /// Elasticsearch version number, e.g. `"8.14.1"`.
    pub number: String,
}

/// Primary-shard statistics for a single index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of documents.
    pub document_count: u64,
    /// Store size in bytes.
    pub store_size_bytes: u64,
    /// Total indexing operations.
    pub indexing_total: u64,
    /// Total search queries.
    pub search_total: u64,
}

/// Thin Elasticsearch client over HTTP.
#[derive(Debug, Clone)]
pub struct EsClient {
    http: reqwest::Client,
    node: String,
    index: String,
    auth: Option<(String, String)>,
    max_retries: u32,
}

impl EsClient {
    /// Create a client from configuration. Does not contact the cluster.
    pub fn new(config: &ElasticsearchConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(map_transport_error)?;

        let auth = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        };

        Ok(Self {
            http,
            node: config.node.trim_end_matches('/').to_string(),
            index: config.index.clone(),
            auth,
            max_retries: config.max_retries,
        })
    }

    /// The default index name from configuration.
    pub fn default_index(&self) -> &str {
        &self.index
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.node, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);
        match &self.auth {
            Some((user, pass)) => builder.basic_auth(user, Some(pass)),
            None => builder,
        }
    }

    /// Send a request, retrying connect/timeout failures up to the
    /// configured limit. Non-2xx responses are never retried.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let mut remaining = self.max_retries;
        let mut current = builder;
        loop {
            let fallback = if remaining > 0 { current.try_clone() } else { None };

            match current.send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().await.unwrap_or_default();
                    return Err(response_error(status, &body));
                }
                Err(e) => match fallback {
                    Some(next) if e.is_connect() || e.is_timeout() => {
                        remaining -= 1;
                        current = next;
                    }
                    _ => return Err(map_transport_error(e)),
                },
            }
        }
    }

    /// Check that the cluster answers at all.
    pub async fn ping(&self) -> Result<bool, AppError> {
        let response = self
            .request(Method::HEAD, "/")
            .send()
            .await
            .map_err(map_transport_error)?;
        Ok(response.status().is_success())
    }

    /// Fetch cluster name and version.
    pub async fn info(&self) -> Result<ClusterInfo, AppError> {
        let response = self.send(self.request(Method::GET, "/")).await?;
        response.json().await.map_err(map_transport_error)
    }

    /// Whether the given index exists.
    pub async fn index_exists(&self, index: &str) -> Result<bool, AppError> {
        let response = self
            .request(Method::HEAD, index)
            .send()
            .await
            .map_err(map_transport_error)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(response_error(status.as_u16(), &body))
            }
        }
    }

    /// Create an index with the given mapping. No-op if it already exists.
    pub async fn create_index(
        &self,
        index: &str,
        mapping: &serde_json::Value,
    ) -> Result<(), AppError> {
        if self.index_exists(index).await? {
            info!(index, "Index already exists");
            return Ok(());
        }

        self.send(self.request(Method::PUT, index).json(mapping))
            .await?;
        info!(index, "Index created");
        Ok(())
    }

    /// Delete an index. No-op if it does not exist.
    pub async fn delete_index(&self, index: &str) -> Result<(), AppError> {
        if !self.index_exists(index).await? {
            info!(index, "Index does not exist");
            return Ok(());
        }

        self.send(self.request(Method::DELETE, index)).await?;
        info!(index, "Index deleted");
        Ok(())
    }

    /// Fetch primary-shard statistics for an index.
    pub async fn index_stats(&self, index: &str) -> Result<IndexStats, AppError> {
        let response = self
            .send(self.request(Method::GET, &format!("{index}/_stats")))
            .await?;
        let body: serde_json::Value = response.json().await.map_err(map_transport_error)?;

        let metric = |pointer: &str| body.pointer(pointer).and_then(|v| v.as_u64()).unwrap_or(0);

        Ok(IndexStats {
            document_count: metric("/_all/primaries/docs/count"),
            store_size_bytes: metric("/_all/primaries/store/size_in_bytes"),
            indexing_total: metric("/_all/primaries/indexing/index_total"),
            search_total: metric("/_all/primaries/search/query_total"),
        })
    }

    /// Make recent changes searchable immediately.
    pub async fn refresh_index(&self, index: &str) -> Result<(), AppError> {
        self.send(self.request(Method::POST, &format!("{index}/_refresh")))
            .await?;
        info!(index, "Index refreshed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(node: &str) -> EsClient {
        EsClient::new(&ElasticsearchConfig {
            node: node.to_string(),
            ..ElasticsearchConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = client("http://localhost:9200/");
        assert_eq!(client.node, "http://localhost:9200");
    }

    #[test]
    fn default_index_comes_from_config() {
        let client = client("http://localhost:9200");
        assert_eq!(client.default_index(), "products");
    }

    #[test]
    fn retry_budget_comes_from_config() {
        let client = client("http://localhost:9200");
        assert_eq!(client.max_retries, 3);
    }

    #[tokio::test]
    async fn unreachable_node_fails_as_search_engine_after_retries() {
        let client = EsClient::new(&ElasticsearchConfig {
            node: "http://127.0.0.1:9".to_string(),
            request_timeout_seconds: 1,
            max_retries: 2,
            ..ElasticsearchConfig::default()
        })
        .unwrap();
        let err = client.info().await.unwrap_err();
        assert_eq!(err.kind, shopsearch_core::ErrorKind::SearchEngine);
    }

    #[test]
    fn cluster_info_deserializes() {
        let info: ClusterInfo = serde_json::from_str(
            r#"{"cluster_name":"es-local","version":{"number":"8.14.1"},"tagline":"You Know, for Search"}"#,
        )
        .unwrap();
        assert_eq!(info.cluster_name, "es-local");
        assert_eq!(info.version.number, "8.14.1");
    }
}
