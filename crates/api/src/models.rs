//! API request and response models.

use chrono::{DateTime, Utc};
use dlmm_scout_domain::{HealthReport, PoolInfo, RankedPool, RoiEstimate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers.
    pub status: &'static str,
    /// Pools currently cached.
    pub pools_cached: usize,
    /// When the snapshot was last replaced.
    pub last_refresh: Option<DateTime<Utc>>,
}

/// Body of `POST /pools/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Pools in the fresh snapshot.
    pub fetched: usize,
}

/// Query of `GET /pools`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring matched against pool name and address.
    #[serde(default)]
    pub query: String,
    /// Liquidity floor; pools below it are excluded.
    pub min_liquidity: Option<Decimal>,
    /// Volume floor; pools below it are excluded.
    pub min_volume: Option<Decimal>,
}

/// Query of `GET /pools/top`.
#[derive(Debug, Deserialize)]
pub struct RankQuery {
    /// Deposit amount in USD. Must be positive.
    pub deposit: Decimal,
    /// Whether the deposit joins the pool liquidity.
    #[serde(default)]
    pub joins_pool: bool,
    /// Liquidity floor; pools below it rank last with a zero return.
    pub min_liquidity: Option<Decimal>,
    /// Volume floor; pools below it rank last with a zero return.
    pub min_volume: Option<Decimal>,
    /// Maximum entries to return.
    pub limit: Option<usize>,
}

/// Query of `GET /pools/{address}/estimate`.
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    /// Deposit amount in USD.
    pub deposit: Decimal,
    /// Whether the deposit joins the pool liquidity.
    #[serde(default)]
    pub joins_pool: bool,
}

/// Query of `GET /pools/{address}/health`.
#[derive(Debug, Deserialize)]
pub struct PoolHealthQuery {
    /// Deposit amount used for the contribution figures; defaults to zero.
    pub deposit: Option<Decimal>,
}

/// Body of `GET /pools`.
#[derive(Debug, Serialize)]
pub struct ListPoolsResponse {
    /// Matching pools, sorted by liquidity descending.
    pub pools: Vec<PoolInfo>,
    /// Number of matches.
    pub total: usize,
}

/// Body of `GET /pools/top`.
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    /// Ranked pools, best first.
    pub pools: Vec<RankedPool>,
}

/// Body of `GET /pools/{address}/estimate`.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// The selected pool.
    pub pool: PoolInfo,
    /// The ROI projection.
    pub estimate: RoiEstimate,
}

/// Body of `GET /pools/{address}/health`.
#[derive(Debug, Serialize)]
pub struct PoolHealthResponse {
    /// The scored pool.
    pub pool: PoolInfo,
    /// The health report.
    pub report: HealthReport,
}

/// One entry of the local store.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreEntry {
    /// Entry key.
    pub key: String,
    /// Raw stored value.
    pub value: String,
}

/// Body of `PUT /store/{key}`.
#[derive(Debug, Deserialize)]
pub struct PutEntryRequest {
    /// Value to store.
    pub value: String,
}

/// Generic acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}
