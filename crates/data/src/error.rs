//! Error types for the remote provider and the local store.

use thiserror::Error;

/// Errors from the remote pool data API.
#[derive(Debug, Error)]
pub enum DataError {
    /// Transport-level failure talking to the API.
    #[error("request to {url} failed: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: reqwest::StatusCode,
    },
    /// The response body did not decode as expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

/// Errors from the local key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored value could not be encoded or decoded.
    #[error("value under key {key} is not valid JSON: {source}")]
    Codec {
        /// Store key.
        key: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The database never became available within the retry budget.
    #[error("store did not become available after {attempts} attempts")]
    Unavailable {
        /// How many open attempts were made.
        attempts: u32,
    },
}
