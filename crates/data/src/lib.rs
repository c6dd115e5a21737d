//! Data access for the DLMM pool scout.
//!
//! - HTTP provider for the Meteora DLMM pair API
//! - embedded key-value store for the dashboard's persisted state

/// Error types.
pub mod error;
/// Remote pool data source.
pub mod provider;
/// Local key-value persistence.
pub mod store;

pub use error::{DataError, StoreError};
pub use provider::{DEFAULT_BASE_URL, MeteoraDlmmProvider, PoolDataProvider};
pub use store::LocalStore;
