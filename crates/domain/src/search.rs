//! Name and address search over pool snapshots.

use crate::deposit::PoolFilter;
use crate::entities::pool::PoolInfo;

/// Case-insensitive substring search over pool name and address.
///
/// Unlike ranking, pools below the screening floors are excluded here
/// entirely. Matches come back sorted by liquidity, descending.
#[must_use]
pub fn search_pools<'a>(
    pools: &'a [PoolInfo],
    query: &str,
    filter: &PoolFilter,
) -> Vec<&'a PoolInfo> {
    let needle = query.to_lowercase();
    let mut matches: Vec<&PoolInfo> = pools
        .iter()
        .filter(|p| filter.passes(p))
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.address.to_lowercase().contains(&needle)
        })
        .collect();
    matches.sort_by(|a, b| b.liquidity.cmp(&a.liquidity));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pool(address: &str, name: &str, liquidity: Decimal, volume: Decimal) -> PoolInfo {
        PoolInfo {
            address: address.to_string(),
            name: name.to_string(),
            mint_x: "x".to_string(),
            mint_y: "y".to_string(),
            bin_step: 10,
            base_fee_percentage: dec!(0.25),
            liquidity,
            trade_volume_24h: volume,
            fees_24h: dec!(1),
            cumulative_trade_volume: Decimal::ZERO,
            cumulative_fee_volume: Decimal::ZERO,
        }
    }

    #[test]
    fn test_matches_name_or_address_case_insensitively() {
        let pools = vec![
            pool("9xAbc", "SOL-USDC", dec!(1000), dec!(1000)),
            pool("7kDef", "JUP-SOL", dec!(2000), dec!(1000)),
            pool("3mGhi", "BONK-USDC", dec!(3000), dec!(1000)),
        ];

        let by_name = search_pools(&pools, "sol", &PoolFilter::default());
        assert_eq!(by_name.len(), 2);

        let by_address = search_pools(&pools, "9xabc", &PoolFilter::default());
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].name, "SOL-USDC");
    }

    #[test]
    fn test_results_sorted_by_liquidity_descending() {
        let pools = vec![
            pool("a", "SOL-USDC", dec!(1000), dec!(1000)),
            pool("b", "SOL-USDT", dec!(5000), dec!(1000)),
        ];

        let results = search_pools(&pools, "sol", &PoolFilter::default());
        assert_eq!(results[0].address, "b");
        assert_eq!(results[1].address, "a");
    }

    #[test]
    fn test_under_threshold_pools_are_excluded() {
        let pools = vec![
            pool("a", "SOL-USDC", dec!(100), dec!(1000)),
            pool("b", "SOL-USDT", dec!(5000), dec!(1000)),
        ];
        let filter = PoolFilter::new(dec!(500), Decimal::ZERO).unwrap();

        let results = search_pools(&pools, "sol", &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].address, "b");
    }

    #[test]
    fn test_empty_query_matches_everything_past_the_filter() {
        let pools = vec![
            pool("a", "SOL-USDC", dec!(1000), dec!(1000)),
            pool("b", "JUP-SOL", dec!(2000), dec!(1000)),
        ];

        let results = search_pools(&pools, "", &PoolFilter::default());
        assert_eq!(results.len(), 2);
    }
}
