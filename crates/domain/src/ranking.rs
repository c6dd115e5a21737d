//! Deposit-return ranking of pool snapshots.

use crate::deposit::{DepositAssumption, PoolFilter};
use crate::entities::pool::PoolInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of pools the dashboard surfaces by default.
pub const DEFAULT_RANKING_LIMIT: usize = 50;

/// A pool snapshot paired with its projected daily fee income in USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPool {
    pub pool: PoolInfo,
    pub daily_return: Decimal,
}

/// Projected daily fee income of `deposit` against a single pool.
///
/// A pool below either screening floor is assigned a zero return but is not
/// dropped: it still appears in the ranking, after every pool with a
/// positive return. A pool whose effective liquidity is not positive also
/// yields zero rather than a division error.
#[must_use]
pub fn daily_return(pool: &PoolInfo, deposit: &DepositAssumption, filter: &PoolFilter) -> Decimal {
    if !filter.passes(pool) {
        return Decimal::ZERO;
    }
    let effective = deposit.effective_liquidity(pool.liquidity);
    if effective <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    deposit.amount / effective * pool.fees_24h
}

/// Ranks the snapshot set by projected daily return, descending.
///
/// The sort is stable, so pools with equal returns keep their input order.
/// The result is truncated to `limit` entries.
#[must_use]
pub fn rank_pools(
    pools: &[PoolInfo],
    deposit: &DepositAssumption,
    filter: &PoolFilter,
    limit: usize,
) -> Vec<RankedPool> {
    let mut ranked: Vec<RankedPool> = pools
        .iter()
        .map(|pool| RankedPool {
            pool: pool.clone(),
            daily_return: daily_return(pool, deposit, filter),
        })
        .collect();
    ranked.sort_by(|a, b| b.daily_return.cmp(&a.daily_return));
    ranked.truncate(limit);
    ranked
}
