//! Core domain logic for the DLMM pool scout.
//!
//! Pure computation over pool snapshots fetched from the DLMM pair API:
//! - deposit-return ranking of the whole pool set
//! - ROI estimation for a single selected pool
//! - composite pool-health scoring
//! - name/address search
//!
//! Nothing in this crate performs I/O. Every result is a pure function of
//! the snapshot and the user inputs, so repeated calls with the same
//! arguments produce identical output.

/// User deposit inputs and screening thresholds.
pub mod deposit;
/// Pool entities.
pub mod entities;
/// ROI estimation for a single pool.
pub mod estimation;
/// Composite pool-health scoring.
pub mod health;
/// Deposit-return ranking.
pub mod ranking;
/// Name and address search.
pub mod search;

pub use deposit::{DepositAssumption, DomainError, PoolFilter};
pub use entities::pool::PoolInfo;
pub use estimation::{RoiEstimate, estimate_roi};
pub use health::{HealthReport, HealthThresholds, score_pool};
pub use ranking::{DEFAULT_RANKING_LIMIT, RankedPool, rank_pools};
pub use search::search_pools;
