//! Composite pool-health scoring.
//!
//! Scores one pool against the whole snapshot set: three boolean threshold
//! checks plus two cohort comparisons against pools with more liquidity or
//! more volume, combined into a weighted composite in `[0, 1]`.

use crate::entities::pool::PoolInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds for the boolean health checks, in USD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthThresholds {
    pub min_liquidity: Decimal,
    pub min_volume: Decimal,
    pub significant_liquidity: Decimal,
    pub diversity_minimum: usize,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            min_liquidity: Decimal::from(1000),
            min_volume: Decimal::from(1000),
            significant_liquidity: Decimal::from(5000),
            diversity_minimum: 2,
        }
    }
}

/// Health metrics for one pool against the snapshot set.
///
/// The cohort ratios are means over pools holding strictly more liquidity
/// (respectively volume); an empty cohort reads as zero. `health_score`
/// weighs all five factors at 0.2 each, so it lands in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub liquidity_ok: bool,
    pub volume_ok: bool,
    pub diversity_ok: bool,
    pub user_contribution_pct: Decimal,
    pub projected_return: Decimal, // USD
    pub higher_tvl_return: Decimal,
    pub higher_volume_return: Decimal,
    pub health_score: Decimal,
}

/// Scores `pool` against the full snapshot set.
///
/// The diversity check counts pools that are significant *and share the
/// scored pool's address*, so the count is always 0 or 1; with the default
/// `diversity_minimum` of 2 the check never passes. Intentional: the
/// cross-pool semantics are unsettled, so the self-match behavior is kept
/// as is.
///
/// Unlike ranking and estimation, the contribution figures here always add
/// the deposit to the pool's liquidity.
#[must_use]
pub fn score_pool(
    pool: &PoolInfo,
    all_pools: &[PoolInfo],
    thresholds: &HealthThresholds,
    deposit_amount: Decimal,
) -> HealthReport {
    let liquidity_ok = pool.liquidity >= thresholds.min_liquidity;
    let volume_ok = pool.trade_volume_24h >= thresholds.min_volume;

    let significant_same_address = all_pools
        .iter()
        .filter(|p| p.liquidity >= thresholds.significant_liquidity && p.address == pool.address)
        .count();
    let diversity_ok = significant_same_address >= thresholds.diversity_minimum;

    let effective = pool.liquidity + deposit_amount;
    let (user_contribution_pct, projected_return) = if effective <= Decimal::ZERO {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let share = deposit_amount / effective;
        (share * Decimal::ONE_HUNDRED, share * pool.fees_24h)
    };

    let higher_tvl_return = cohort_mean(
        all_pools
            .iter()
            .filter(|p| p.liquidity > pool.liquidity)
            .map(|p| (p.fees_24h, p.liquidity)),
    );
    let higher_volume_return = cohort_mean(
        all_pools
            .iter()
            .filter(|p| p.trade_volume_24h > pool.trade_volume_24h)
            .map(|p| (p.fees_24h, p.trade_volume_24h)),
    );

    let weight = Decimal::new(2, 1);
    let health_score = weight * check_factor(liquidity_ok)
        + weight * check_factor(volume_ok)
        + weight * check_factor(diversity_ok)
        + weight * higher_tvl_return
        + weight * higher_volume_return;

    HealthReport {
        liquidity_ok,
        volume_ok,
        diversity_ok,
        user_contribution_pct,
        projected_return,
        higher_tvl_return,
        higher_volume_return,
        health_score,
    }
}

fn check_factor(ok: bool) -> Decimal {
    if ok { Decimal::ONE } else { Decimal::ZERO }
}

/// Mean of `numerator / denominator` over the cohort. Members with a zero
/// denominator are skipped; an empty cohort yields zero.
fn cohort_mean(cohort: impl Iterator<Item = (Decimal, Decimal)>) -> Decimal {
    let mut sum = Decimal::ZERO;
    let mut count = 0u32;
    for (numerator, denominator) in cohort {
        if denominator.is_zero() {
            continue;
        }
        sum += numerator / denominator;
        count += 1;
    }
    if count == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(count)
    }
}
