//! ROI estimation for a single selected pool.

use crate::deposit::DepositAssumption;
use crate::entities::pool::PoolInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ROI projection for one pool and one deposit.
///
/// `days_to_break_even` is a linear payback figure, not a compounding ROI;
/// `None` means the deposit never breaks even at the current rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub percent_of_pool: Decimal,
    pub daily_return: Decimal, // USD
    pub days_to_break_even: Option<Decimal>,
}

/// Projects the deposit's pool share, daily fee income and payback time.
///
/// A non-positive effective liquidity clamps every figure to zero instead
/// of producing a division error.
#[must_use]
pub fn estimate_roi(pool: &PoolInfo, deposit: &DepositAssumption) -> RoiEstimate {
    let effective = deposit.effective_liquidity(pool.liquidity);
    if effective <= Decimal::ZERO {
        return RoiEstimate {
            percent_of_pool: Decimal::ZERO,
            daily_return: Decimal::ZERO,
            days_to_break_even: None,
        };
    }

    let share = deposit.amount / effective;
    let daily_return = share * pool.fees_24h;
    let days_to_break_even = if daily_return.is_zero() {
        None
    } else {
        Some(deposit.amount / daily_return)
    };

    RoiEstimate {
        percent_of_pool: share * Decimal::ONE_HUNDRED,
        daily_return,
        days_to_break_even,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pool(liquidity: Decimal, fees_24h: Decimal) -> PoolInfo {
        PoolInfo {
            address: "addr".to_string(),
            name: "A-B".to_string(),
            mint_x: "x".to_string(),
            mint_y: "y".to_string(),
            bin_step: 10,
            base_fee_percentage: dec!(0.25),
            liquidity,
            trade_volume_24h: dec!(500),
            fees_24h,
            cumulative_trade_volume: Decimal::ZERO,
            cumulative_fee_volume: Decimal::ZERO,
        }
    }

    #[test]
    fn test_joining_deposit_grows_denominator() {
        // 100 / (1000 + 100) * 10 ≈ 0.909, share ≈ 9.09%
        let deposit = DepositAssumption::new(dec!(100), true).unwrap();
        let estimate = estimate_roi(&pool(dec!(1000), dec!(10)), &deposit);

        assert!((estimate.daily_return - dec!(0.909)).abs() < dec!(0.001));
        assert!((estimate.percent_of_pool - dec!(9.09)).abs() < dec!(0.01));
    }

    #[test]
    fn test_outside_deposit_never_grows_denominator() {
        // 100 / 1000 * 10 = 1, exactly
        let deposit = DepositAssumption::new(dec!(100), false).unwrap();
        let estimate = estimate_roi(&pool(dec!(1000), dec!(10)), &deposit);

        assert_eq!(estimate.daily_return, dec!(1));
        assert_eq!(estimate.percent_of_pool, dec!(10));
    }

    #[test]
    fn test_payback_is_deposit_over_daily_return() {
        // Daily return of 1 on a 100 deposit: 100 days to break even.
        let deposit = DepositAssumption::new(dec!(100), false).unwrap();
        let estimate = estimate_roi(&pool(dec!(1000), dec!(10)), &deposit);

        assert_eq!(estimate.days_to_break_even, Some(dec!(100)));
    }

    #[test]
    fn test_zero_deposit_yields_zero_return_and_no_payback() {
        let deposit = DepositAssumption::new(Decimal::ZERO, true).unwrap();
        let estimate = estimate_roi(&pool(dec!(1000), dec!(10)), &deposit);

        assert_eq!(estimate.daily_return, Decimal::ZERO);
        assert_eq!(estimate.percent_of_pool, Decimal::ZERO);
        assert_eq!(estimate.days_to_break_even, None);
    }

    #[test]
    fn test_zero_effective_liquidity_is_clamped() {
        let deposit = DepositAssumption::new(dec!(100), false).unwrap();
        let estimate = estimate_roi(&pool(Decimal::ZERO, dec!(10)), &deposit);

        assert_eq!(estimate.daily_return, Decimal::ZERO);
        assert_eq!(estimate.days_to_break_even, None);
    }

    #[test]
    fn test_fee_free_pool_never_breaks_even() {
        let deposit = DepositAssumption::new(dec!(100), true).unwrap();
        let estimate = estimate_roi(&pool(dec!(1000), Decimal::ZERO), &deposit);

        assert_eq!(estimate.daily_return, Decimal::ZERO);
        assert_eq!(estimate.days_to_break_even, None);
    }
}
