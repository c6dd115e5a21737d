//! Remote pool data source.
//!
//! The dashboard consumes two endpoints of the public DLMM pair API:
//! `/pair/all` for the full pool snapshot and `/pair/{address}/bin_arrays`
//! for a pool's raw bin data. Both are plain GET-and-decode calls; there is
//! no incremental diffing, a refresh replaces the snapshot wholesale.

use crate::error::DataError;
use async_trait::async_trait;
use dlmm_scout_domain::PoolInfo;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// Public DLMM pair API.
pub const DEFAULT_BASE_URL: &str = "https://dlmm-api.meteora.ag";

/// Source of pool snapshots.
#[async_trait]
pub trait PoolDataProvider {
    /// Fetches the full pool set.
    async fn fetch_pools(&self) -> Result<Vec<PoolInfo>, DataError>;

    /// Fetches the raw bin arrays of one pool. The payload is opaque to
    /// this crate and passed through undecoded.
    async fn fetch_bin_arrays(&self, address: &str) -> Result<Vec<Value>, DataError>;
}

/// HTTP client for the Meteora DLMM pair API.
pub struct MeteoraDlmmProvider {
    http: Client,
    base_url: String,
}

impl MeteoraDlmmProvider {
    /// Creates a provider against the public API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a provider against a custom base URL. A trailing slash is
    /// tolerated and stripped.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DataError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| DataError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| DataError::Decode { url, source })
    }
}

impl Default for MeteoraDlmmProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoolDataProvider for MeteoraDlmmProvider {
    async fn fetch_pools(&self) -> Result<Vec<PoolInfo>, DataError> {
        let pools: Vec<PoolInfo> = self.get_json("/pair/all").await?;
        info!(count = pools.len(), "fetched pool snapshot");
        Ok(pools)
    }

    async fn fetch_bin_arrays(&self, address: &str) -> Result<Vec<Value>, DataError> {
        self.get_json(&format!("/pair/{address}/bin_arrays")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let provider = MeteoraDlmmProvider::with_base_url("http://localhost:9999/");
        assert_eq!(provider.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_default_points_at_the_public_api() {
        let provider = MeteoraDlmmProvider::default();
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }
}
