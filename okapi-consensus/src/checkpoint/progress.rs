//! Initial-sync progress estimation.
//!
//! During the initial sync, the node knows how many transactions it has
//! verified, but not how many remain: the chain keeps growing while the sync
//! runs. Each network's calibration constants anchor the estimate, by
//! extrapolating the post-checkpoint transaction count from wall-clock time.


use chrono::{DateTime, Utc};

use okapi_chain::block::Height;

/// How many times we expect transactions after the last checkpoint to
/// be slower to verify than transactions before it.
///
/// Blocks below the last checkpoint skip most signature checks, so their
/// transactions verify cheaply. This factor is a compromise, not a
/// measurement, and it can't be accurate for every system: reindexing from a
/// fast disk with a slow CPU pushes it up towards 20, while downloading over
/// a slow network with a fast multicore CPU pulls it down towards 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sync-progress calibration constants for one network.
///
/// Updated whenever the network's checkpoint table gains a new highest entry.
#[derive(Clone, Debug)]
pub struct SyncCalibration {
    /// The UTC timestamp of the block at the highest checkpoint height.
    pub last_checkpoint_time: DateTime<Utc>,

    /// The cumulative number of transactions in the chain, from genesis up to
    /// and including the block at the highest checkpoint height.
    pub transaction_count: u64,

    /// The estimated number of transactions per day after the last
    /// checkpoint.
    pub transactions_per_day: f64,
}

/// A caller-supplied, read-only view of a block in the caller's chain index.
///
/// Progress is estimated for the index entry of the current chain tip.
#[derive(Clone, Debug)]
pub struct SyncPosition {
    /// The height of the block.
    pub height: Height,

    /// The cumulative number of transactions in the chain, from genesis up to
    /// and including this block.
    pub transaction_count: u64,

    /// The UTC timestamp in the block's header.
    pub time: DateTime<Utc>,
}

impl SyncCalibration {
    /// Guess how far the node is through verification when its chain tip is
    /// at `position`, and the wall clock reads `now`.
    ///
    /// Work is counted as one unit per transaction up to the last checkpoint,
    /// and [`SIGCHECK_VERIFICATION_FACTOR`] units per transaction after it.
    /// The transactions that have not been downloaded yet are estimated from
    /// the wall-clock time elapsed since the tip, at this network's
    /// [`transactions_per_day`](Self::transactions_per_day).
    ///
    /// Returns a value in `[0, 1]`. When the calibration constants and the
    /// position are all zero, there is no work to measure, and the estimate
    /// is defined as `0.0` rather than dividing zero by zero.
    pub fn estimate_progress(&self, position: &SyncPosition, now: DateTime<Utc>) -> f64 {
        let work_before;
        let work_after;

        if position.transaction_count <= self.transaction_count {
            let cheap_before = position.transaction_count as f64;
            let cheap_after = (self.transaction_count - position.transaction_count) as f64;
            let expensive_after =
                days_between(self.last_checkpoint_time, now) * self.transactions_per_day;

            work_before = cheap_before;
            work_after = cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR;
        } else {
            let cheap_before = self.transaction_count as f64;
            let expensive_before = (position.transaction_count - self.transaction_count) as f64;
            let expensive_after = days_between(position.time, now) * self.transactions_per_day;

            work_before = cheap_before + expensive_before * SIGCHECK_VERIFICATION_FACTOR;
            work_after = expensive_after * SIGCHECK_VERIFICATION_FACTOR;
        }

        if work_before + work_after == 0.0 {
            return 0.0;
        }

        work_before / (work_before + work_after)
    }
}

/// Returns the number of days from `earlier` to `now`, as a fraction.
///
/// Clamped to zero when `earlier` is in the future, so a skewed local clock
/// cannot push the estimate above 1.
fn days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - earlier).num_seconds().max(0) as f64 / SECONDS_PER_DAY
}
