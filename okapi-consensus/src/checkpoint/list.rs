//! Checkpoint tables for each Okapi network.
//!
//! Each checkpoint consists of a block height and block hash.


use std::{
    collections::{BTreeMap, HashSet},
    str::FromStr,
};

use okapi_chain::{
    block::{Hash, Height},
    parameters::{Network, GENESIS_PREVIOUS_BLOCK_HASH},
};

use crate::BoxError;

const MAINNET_CHECKPOINTS: &str = include_str!("main-checkpoints.txt");
const TESTNET_CHECKPOINTS: &str = include_str!("test-checkpoints.txt");

/// An ordered table of block heights and their hard-coded block hashes.
///
/// Checkpoints should be chosen from blocks that are surrounded by blocks
/// with reasonable timestamps, and buried deep enough that forks or chain
/// reorganizations can no longer reach them.
///
/// The table is read-only after construction, so we use a `BTreeMap`, and do
/// the uniqueness checks on initialisation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CheckpointList(BTreeMap<Height, Hash>);

impl FromStr for CheckpointList {
    type Err = BoxError;

    /// Parse a string into a CheckpointList.
    ///
    /// Each line has one checkpoint, consisting of a [`Height`] and a
    /// [`Hash`], separated by a single space. An empty string is a valid,
    /// empty checkpoint list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut checkpoint_list: Vec<(Height, Hash)> = Vec::new();

        for checkpoint in s.lines() {
            let fields = checkpoint.split(' ').collect::<Vec<_>>();
            if let [height, hash] = fields[..] {
                checkpoint_list.push((height.parse()?, hash.parse()?));
            } else {
                Err(format!(
                    "invalid checkpoint format: expected 2 space-separated fields but found {}: '{}'",
                    fields.len(),
                    checkpoint
                ))?;
            };
        }

        CheckpointList::from_list(checkpoint_list)
    }
}

impl CheckpointList {
    /// Returns the hard-coded checkpoint list for `network`.
    ///
    /// The Testnet list is empty: the test network carries no trust anchors.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Mainnet => MAINNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Mainnet checkpoint list parses and validates"),
            Network::Testnet => TESTNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Testnet checkpoint list parses and validates"),
        }
    }

    /// Create a new checkpoint list from `list`.
    ///
    /// Checkpoint heights and checkpoint hashes must be unique, and no
    /// checkpoint may use the null hash. An empty list is valid.
    ///
    /// There is no way to add or remove checkpoints after construction: the
    /// hard-coded tables are the trust anchor, and a table that could be
    /// changed at runtime would not anchor anything.
    pub fn from_list(list: impl IntoIterator<Item = (Height, Hash)>) -> Result<Self, BoxError> {
        // BTreeMap silently ignores duplicates, so we count the checkpoints
        // before adding them to the map
        let original_checkpoints: Vec<(Height, Hash)> = list.into_iter().collect();
        let original_len = original_checkpoints.len();

        let checkpoints: BTreeMap<Height, Hash> = original_checkpoints.into_iter().collect();

        // This check rejects duplicate heights, whether they have the same or
        // different hashes
        if checkpoints.len() != original_len {
            Err("checkpoint heights must be unique")?;
        }

        let block_hashes: HashSet<&Hash> = checkpoints.values().collect();
        if block_hashes.len() != original_len {
            Err("checkpoint hashes must be unique")?;
        }

        // The null hash is the parent of genesis blocks, it never identifies
        // a real block
        if block_hashes.contains(&GENESIS_PREVIOUS_BLOCK_HASH) {
            Err("checkpoint list contains invalid checkpoint hash: found null hash")?;
        }

        let checkpoints = CheckpointList(checkpoints);
        if checkpoints.max_height() > Some(Height::MAX) {
            Err("checkpoint list contains invalid checkpoint: checkpoint height is greater than the maximum block height")?;
        }

        Ok(checkpoints)
    }

    /// Return true if there is a checkpoint at `height`.
    ///
    /// See `BTreeMap::contains_key()` for details.
    pub fn contains(&self, height: Height) -> bool {
        self.0.contains_key(&height)
    }

    /// Returns the hash corresponding to the checkpoint at `height`,
    /// or None if there is no checkpoint at that height.
    ///
    /// See `BTreeMap::get()` for details.
    pub fn hash(&self, height: Height) -> Option<Hash> {
        self.0.get(&height).cloned()
    }

    /// Return the block height of the highest checkpoint, or `None` if the
    /// list is empty.
    pub fn max_height(&self) -> Option<Height> {
        self.0.keys().next_back().cloned()
    }

    /// Iterate over the checkpoints from the highest height to the lowest.
    ///
    /// Callers searching for the deepest checkpoint they already know about
    /// rely on this order, so it is guaranteed here rather than assumed from
    /// the iteration order of the backing map.
    pub fn iter_descending(&self) -> impl Iterator<Item = (Height, Hash)> + '_ {
        self.0.iter().rev().map(|(height, hash)| (*height, *hash))
    }

    /// Returns the number of checkpoints in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
