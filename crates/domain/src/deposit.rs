//! User deposit inputs and screening thresholds.
//!
//! These are the only user-controlled values the engines see: the
//! hypothetical deposit amount, whether it joins the pool, and the
//! liquidity/volume floors used for screening.

use crate::entities::pool::PoolInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },
}

/// The user's hypothetical deposit: the amount in USD and whether it is
/// assumed to join the pool, growing the liquidity denominator it earns
/// against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepositAssumption {
    pub amount: Decimal,
    pub joins_pool: bool,
}

impl DepositAssumption {
    /// Creates a deposit assumption, rejecting negative amounts.
    pub fn new(amount: Decimal, joins_pool: bool) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount { field: "deposit" });
        }
        Ok(Self { amount, joins_pool })
    }

    /// The liquidity the deposit would earn against.
    #[must_use]
    pub fn effective_liquidity(&self, pool_liquidity: Decimal) -> Decimal {
        if self.joins_pool {
            pool_liquidity + self.amount
        } else {
            pool_liquidity
        }
    }
}

/// Liquidity and volume screening floors, in USD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolFilter {
    pub min_liquidity: Decimal,
    pub min_volume: Decimal,
}

impl PoolFilter {
    /// Creates a filter, rejecting negative thresholds.
    pub fn new(min_liquidity: Decimal, min_volume: Decimal) -> Result<Self, DomainError> {
        if min_liquidity < Decimal::ZERO {
            return Err(DomainError::NegativeAmount {
                field: "min_liquidity",
            });
        }
        if min_volume < Decimal::ZERO {
            return Err(DomainError::NegativeAmount {
                field: "min_volume",
            });
        }
        Ok(Self {
            min_liquidity,
            min_volume,
        })
    }

    /// Whether a pool clears both floors.
    #[must_use]
    pub fn passes(&self, pool: &PoolInfo) -> bool {
        pool.liquidity >= self.min_liquidity && pool.trade_volume_24h >= self.min_volume
    }
}

impl Default for PoolFilter {
    fn default() -> Self {
        Self {
            min_liquidity: Decimal::ZERO,
            min_volume: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejects_negative_deposit() {
        let err = DepositAssumption::new(dec!(-1), false).unwrap_err();
        assert_eq!(err, DomainError::NegativeAmount { field: "deposit" });
    }

    #[test]
    fn test_effective_liquidity_only_grows_when_joining() {
        let joining = DepositAssumption::new(dec!(100), true).unwrap();
        let outside = DepositAssumption::new(dec!(100), false).unwrap();

        assert_eq!(joining.effective_liquidity(dec!(1000)), dec!(1100));
        assert_eq!(outside.effective_liquidity(dec!(1000)), dec!(1000));
    }

    #[test]
    fn test_filter_rejects_negative_thresholds() {
        assert!(PoolFilter::new(dec!(-1), dec!(0)).is_err());
        assert!(PoolFilter::new(dec!(0), dec!(-1)).is_err());
        assert!(PoolFilter::new(dec!(0), dec!(0)).is_ok());
    }
}
