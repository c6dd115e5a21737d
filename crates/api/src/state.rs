//! Shared application state.

use chrono::{DateTime, Utc};
use dlmm_scout_data::{DataError, LocalStore, PoolDataProvider};
use dlmm_scout_domain::{HealthThresholds, PoolInfo};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::RwLock;

/// Composition root handed to every handler: the remote provider, the
/// local store, the scoring thresholds and the cached pool snapshot.
#[derive(Clone)]
pub struct AppState {
    /// Remote pool data source.
    pub provider: Arc<dyn PoolDataProvider + Send + Sync>,
    /// Health scoring thresholds.
    pub thresholds: HealthThresholds,
    store: Arc<Mutex<LocalStore>>,
    pools: Arc<RwLock<Vec<PoolInfo>>>,
    last_refresh: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Creates state with an empty pool snapshot.
    pub fn new(
        provider: Arc<dyn PoolDataProvider + Send + Sync>,
        store: LocalStore,
        thresholds: HealthThresholds,
    ) -> Self {
        Self {
            provider,
            thresholds,
            store: Arc::new(Mutex::new(store)),
            pools: Arc::new(RwLock::new(Vec::new())),
            last_refresh: Arc::new(RwLock::new(None)),
        }
    }

    /// Refetches the pool set and replaces the cached snapshot wholesale.
    /// Concurrent refreshes race benignly: the last write wins.
    pub async fn refresh(&self) -> Result<usize, DataError> {
        let pools = self.provider.fetch_pools().await?;
        let count = pools.len();
        *self.pools.write().await = pools;
        *self.last_refresh.write().await = Some(Utc::now());
        Ok(count)
    }

    /// Read access to the cached snapshot.
    pub async fn pools(&self) -> tokio::sync::RwLockReadGuard<'_, Vec<PoolInfo>> {
        self.pools.read().await
    }

    /// When the snapshot was last replaced.
    pub async fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.read().await
    }

    /// Locks the local store. Store operations are synchronous and short;
    /// the guard must not be held across an await point.
    pub fn store(&self) -> MutexGuard<'_, LocalStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
