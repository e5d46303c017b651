//! Hard-coded checkpoints into known-good Okapi chain history.
//!
//! Each checkpoint consists of a block height and block hash. A block at a
//! checkpointed height is only accepted if its hash matches the hard-coded
//! hash exactly, which rejects alternate histories that diverge below the
//! highest checkpoint. Heights without a checkpoint are unconstrained.
//!
//! The same tables calibrate the initial-sync progress estimate: transactions
//! below the last checkpoint verify cheaply, while transactions after it pay
//! the full signature-check cost.

mod list;
mod progress;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use okapi_chain::{
    block::{Hash, Height},
    parameters::Network,
};

pub use list::CheckpointList;
pub use progress::{SyncCalibration, SyncPosition, SIGCHECK_VERIFICATION_FACTOR};

/// A network's checkpoint table, paired with its sync-progress calibration.
///
/// There is exactly one `CheckpointSet` per network. It is built on first use
/// and never modified afterwards, so every checkpoint query is a read of
/// shared immutable data, safe to make concurrently without locking.
pub struct CheckpointSet {
    list: CheckpointList,
    calibration: SyncCalibration,
}

static MAINNET: Lazy<CheckpointSet> = Lazy::new(|| CheckpointSet {
    list: CheckpointList::new(Network::Mainnet),
    calibration: SyncCalibration {
        last_checkpoint_time: DateTime::from_timestamp(1_388_880_557, 0)
            .expect("hard-coded Mainnet checkpoint timestamp is valid"),
        transaction_count: 0,
        transactions_per_day: 8_000.0,
    },
});

static TESTNET: Lazy<CheckpointSet> = Lazy::new(|| CheckpointSet {
    // Testnet has no checkpoints, but sync progress is still estimated there
    list: CheckpointList::new(Network::Testnet),
    calibration: SyncCalibration {
        last_checkpoint_time: DateTime::from_timestamp(1_369_685_559, 0)
            .expect("hard-coded Testnet calibration timestamp is valid"),
        transaction_count: 37_581,
        transactions_per_day: 300.0,
    },
});

impl CheckpointSet {
    /// Returns the checkpoint set for `network`.
    pub fn for_network(network: Network) -> &'static CheckpointSet {
        match network {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
        }
    }

    /// Returns this network's checkpoint table.
    pub fn list(&self) -> &CheckpointList {
        &self.list
    }

    /// Returns this network's sync-progress calibration.
    pub fn calibration(&self) -> &SyncCalibration {
        &self.calibration
    }
}

/// Check a block hash against the hard-coded checkpoint at `height`, if any.
///
/// Returns `false` only when `height` is checkpointed and `hash` differs
/// from the hard-coded hash; the caller is expected to reject that chain.
/// In every other case the block is unconstrained by checkpoints:
///
/// - there is no checkpoint at `height`,
/// - `checkpoints_enabled` is `false` (checkpoints are an optional hardening
///   feature, not a consensus rule), or
/// - `network` is a test network, which carries no trust anchors.
pub fn verify(network: Network, height: Height, hash: Hash, checkpoints_enabled: bool) -> bool {
    if network.is_a_test_network() {
        // Testnet has no checkpoints
        return true;
    }
    if !checkpoints_enabled {
        return true;
    }

    match CheckpointSet::for_network(network).list.hash(height) {
        None => true,
        Some(expected) if hash == expected => true,
        Some(expected) => {
            tracing::warn!(
                ?height,
                candidate = ?hash,
                ?expected,
                "block hash does not match the hard-coded checkpoint",
            );
            false
        }
    }
}

/// Guess how far we are through initial-sync verification at `position`.
///
/// Returns an estimate in `[0, 1]`, or exactly `0.0` when no chain tip is
/// known yet. The estimate is heuristic and meant for progress display only,
/// but it does not decrease as the tip advances under a fixed clock.
pub fn estimate_verification_progress(
    network: Network,
    position: Option<&SyncPosition>,
    now: DateTime<Utc>,
) -> f64 {
    match position {
        None => 0.0,
        Some(position) => CheckpointSet::for_network(network)
            .calibration
            .estimate_progress(position, now),
    }
}

/// Returns the height of the highest checkpoint, as a rough estimate of the
/// total number of blocks in the network's chain.
///
/// Returns `Height(0)` when checkpoints are disabled, or on a test network.
pub fn total_checkpointed_height(network: Network, checkpoints_enabled: bool) -> Height {
    if network.is_a_test_network() || !checkpoints_enabled {
        return Height(0);
    }

    CheckpointSet::for_network(network)
        .list
        .max_height()
        .unwrap_or(Height(0))
}

/// Find the highest checkpoint block present in the caller's block index.
///
/// `lookup` maps a block hash to the caller's index entry for that block, if
/// the block is known locally. Checkpoints are scanned from the highest
/// height downwards, so the first hit is the deepest checkpoint the caller
/// already has.
///
/// Returns `None` when no checkpoint block is in the index, when checkpoints
/// are disabled, or on a test network.
pub fn last_checkpoint_in_index<B, F>(
    network: Network,
    checkpoints_enabled: bool,
    mut lookup: F,
) -> Option<B>
where
    F: FnMut(Hash) -> Option<B>,
{
    if network.is_a_test_network() || !checkpoints_enabled {
        return None;
    }

    let set = CheckpointSet::for_network(network);
    for (height, hash) in set.list.iter_descending() {
        if let Some(entry) = lookup(hash) {
            tracing::debug!(?height, "highest checkpoint block present in the index");
            return Some(entry);
        }
    }

    None
}
