use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single DLMM pool snapshot as served by the pair API.
///
/// Monetary fields arrive from the API inconsistently as JSON strings or
/// numbers; `Decimal` deserializes from both, so the inconsistency stops at
/// this boundary. Identity is the on-chain `address` only; a snapshot is a
/// value, replaced wholesale on refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolInfo {
    pub address: String,
    pub name: String,
    pub mint_x: String,
    pub mint_y: String,
    pub bin_step: u32,
    pub base_fee_percentage: Decimal, // percent

    // USD figures
    pub liquidity: Decimal,
    pub trade_volume_24h: Decimal,
    pub fees_24h: Decimal,
    pub cumulative_trade_volume: Decimal,
    pub cumulative_fee_volume: Decimal,
}
