//! Tests for checkpoint verification and the checkpoint queries.

use super::*;

use std::collections::HashMap;

use proptest::prelude::*;

use okapi_chain::parameters::Network::*;

use crate::{BoxError, Config};

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("test timestamp is valid")
}

/// Every hard-coded checkpoint hash verifies at its own height
#[test]
fn verify_accepts_the_hard_coded_hash_at_every_checkpoint() {
    okapi_test::init();

    let list = CheckpointSet::for_network(Mainnet).list();
    assert!(!list.is_empty());

    for (height, hash) in list.iter_descending() {
        assert!(
            verify(Mainnet, height, hash, true),
            "hard-coded checkpoint at {height:?} should verify against itself",
        );
    }
}

/// A checkpointed height rejects the null hash and other wrong hashes
#[test]
fn verify_rejects_wrong_hashes_at_checkpointed_heights() -> Result<(), BoxError> {
    okapi_test::init();

    assert!(!verify(Mainnet, Height(500), Hash([0; 32]), true));
    assert!(!verify(Mainnet, Height(500), Hash([0x42; 32]), true));

    // the hash for height 5000 is real, but it is the wrong height
    let wrong_height_hash =
        "5299233cbc9ef9793a43ef239471a1e7f01ce8262c2d0e1c74bf4a9be1026919".parse()?;
    assert!(!verify(Mainnet, Height(500), wrong_height_hash, true));

    Ok(())
}

/// Testnet accepts everything: it carries no trust anchors
#[test]
fn verify_accepts_everything_on_testnet() {
    okapi_test::init();

    assert!(verify(Testnet, Height(0), Hash([0; 32]), true));
    assert!(verify(Testnet, Height(500), Hash([0x42; 32]), true));
    assert!(verify(Testnet, Height::MAX, Hash([0xff; 32]), true));
}

/// Disabling checkpoints accepts everything, even at checkpointed heights
#[test]
fn verify_accepts_everything_when_disabled() {
    okapi_test::init();

    let config = Config::default();
    assert!(config.checkpoints);
    assert!(!verify(Mainnet, Height(500), Hash([0x42; 32]), config.checkpoints));

    let config = Config { checkpoints: false };
    assert!(verify(Mainnet, Height(500), Hash([0x42; 32]), config.checkpoints));
}

/// The total height estimate is the highest checkpoint height, when enabled
#[test]
fn total_checkpointed_height_policy() {
    okapi_test::init();

    assert_eq!(total_checkpointed_height(Mainnet, true), Height(1_500_000));
    assert_eq!(total_checkpointed_height(Mainnet, false), Height(0));
    assert_eq!(total_checkpointed_height(Testnet, true), Height(0));
    assert_eq!(total_checkpointed_height(Testnet, false), Height(0));
}

/// The deepest checkpoint present in the index wins, not the first table
/// entry and not the highest checkpoint overall
#[test]
fn last_checkpoint_in_index_returns_the_deepest_match() {
    okapi_test::init();

    let list = CheckpointSet::for_network(Mainnet).list();

    // an index that only knows about the blocks at heights 500 and 25000,
    // from a table that also checkpoints height 1000000
    let mut index: HashMap<Hash, Height> = HashMap::new();
    for height in [Height(500), Height(25_000)] {
        let hash = list.hash(height).expect("height is checkpointed");
        index.insert(hash, height);
    }
    assert!(list.contains(Height(1_000_000)));

    let found = last_checkpoint_in_index(Mainnet, true, |hash| index.get(&hash).cloned());
    assert_eq!(found, Some(Height(25_000)));
}

/// No checkpoint blocks in the index, disabled checkpoints, and test
/// networks all return no checkpoint
#[test]
fn last_checkpoint_in_index_none_cases() {
    okapi_test::init();

    let empty: HashMap<Hash, Height> = HashMap::new();
    let found = last_checkpoint_in_index(Mainnet, true, |hash| empty.get(&hash).cloned());
    assert_eq!(found, None);

    let list = CheckpointSet::for_network(Mainnet).list();
    let mut index: HashMap<Hash, Height> = HashMap::new();
    let genesis_hash = list.hash(Height(0)).expect("genesis is checkpointed");
    index.insert(genesis_hash, Height(0));

    let found = last_checkpoint_in_index(Mainnet, false, |hash| index.get(&hash).cloned());
    assert_eq!(found, None);

    let found = last_checkpoint_in_index(Testnet, true, |hash| index.get(&hash).cloned());
    assert_eq!(found, None);
}

/// The hard-coded calibrations match the chain history they were taken from
#[test]
fn hard_coded_calibration_constants() {
    okapi_test::init();

    let mainnet = CheckpointSet::for_network(Mainnet).calibration();
    assert_eq!(mainnet.last_checkpoint_time, timestamp(1_388_880_557));
    assert_eq!(mainnet.transaction_count, 0);
    assert_eq!(mainnet.transactions_per_day, 8_000.0);

    let testnet = CheckpointSet::for_network(Testnet).calibration();
    assert_eq!(testnet.last_checkpoint_time, timestamp(1_369_685_559));
    assert_eq!(testnet.transaction_count, 37_581);
    assert_eq!(testnet.transactions_per_day, 300.0);
}

/// With no known chain tip, progress is exactly zero
#[test]
fn progress_with_no_tip_is_zero() {
    okapi_test::init();

    let now = timestamp(1_400_000_000);
    assert_eq!(estimate_verification_progress(Mainnet, None, now), 0.0);
    assert_eq!(estimate_verification_progress(Testnet, None, now), 0.0);
}

/// Progress with the hard-coded calibrations stays in range on both networks
#[test]
fn progress_with_hard_coded_calibration_stays_in_range() {
    okapi_test::init();

    let now = timestamp(1_400_000_000);
    let tip = SyncPosition {
        height: Height(1_000_000),
        transaction_count: 1_000_000,
        time: timestamp(1_400_000_000 - 86_400),
    };

    for network in Network::iter() {
        let progress = estimate_verification_progress(network, Some(&tip), now);
        assert!(
            (0.0..=1.0).contains(&progress),
            "progress {progress} out of range on {network}",
        );
    }
}

proptest! {
    /// Heights without a checkpoint accept any hash, on every network
    #[test]
    fn verify_accepts_any_hash_at_unchecked_heights(
        network in any::<Network>(),
        height in any::<Height>(),
        hash in any::<Hash>(),
    ) {
        okapi_test::init();

        prop_assume!(!CheckpointSet::for_network(network).list().contains(height));

        prop_assert!(verify(network, height, hash, true));
    }

    /// Checkpointed heights reject every hash except the hard-coded one
    #[test]
    fn verify_rejects_arbitrary_hashes_at_checkpointed_heights(hash in any::<Hash>()) {
        okapi_test::init();

        let list = CheckpointSet::for_network(Mainnet).list();
        for (height, expected) in list.iter_descending() {
            prop_assume!(hash != expected);
            prop_assert!(!verify(Mainnet, height, hash, true));
        }
    }
}
