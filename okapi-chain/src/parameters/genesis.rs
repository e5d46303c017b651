//! Genesis parameters for each Okapi network.

/// The parent block hash of the genesis block.
///
/// Every network starts from a genesis block whose parent is the all-zero
/// null hash. The null hash never identifies a real block, so tables of real
/// block hashes must reject it.
pub const GENESIS_PREVIOUS_BLOCK_HASH: crate::block::Hash = crate::block::Hash([0; 32]);
