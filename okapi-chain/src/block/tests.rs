//! Tests for block heights and hashes.

use super::*;

#[test]
fn hash_roundtrips_through_hex() {
    okapi_test::init();

    let hex = "5cf4d300bce5076aa32a2ddf2376c4be335d9656b054c0433124cd2402ed7c48";
    let hash: Hash = hex.parse().expect("valid hex hash parses");

    assert_eq!(hash.to_string(), hex);
    assert_eq!(format!("{hash:?}"), format!("block::Hash(\"{hex}\")"));
}

#[test]
fn hash_rejects_bad_strings() {
    okapi_test::init();

    // too short, too long, and not hex at all
    assert_eq!("5cf4d300".parse::<Hash>(), Err(ParseError::InvalidHash));
    assert_eq!(
        "5cf4d300bce5076aa32a2ddf2376c4be335d9656b054c0433124cd2402ed7c4800"
            .parse::<Hash>(),
        Err(ParseError::InvalidHash)
    );
    assert_eq!(
        "zzf4d300bce5076aa32a2ddf2376c4be335d9656b054c0433124cd2402ed7c48"
            .parse::<Hash>(),
        Err(ParseError::InvalidHash)
    );
}

#[test]
fn height_parses_decimal_strings() {
    okapi_test::init();

    assert_eq!("0".parse::<Height>(), Ok(Height::MIN));
    assert_eq!("1500000".parse::<Height>(), Ok(Height(1_500_000)));
    assert_eq!(Height::MAX.0.to_string().parse::<Height>(), Ok(Height::MAX));
}

#[test]
fn height_rejects_bad_strings() {
    okapi_test::init();

    assert_eq!(
        (Height::MAX.0 + 1).to_string().parse::<Height>(),
        Err(ParseError::HeightOverflow)
    );
    assert_eq!("-1".parse::<Height>(), Err(ParseError::InvalidHeight));
    assert_eq!("ten".parse::<Height>(), Err(ParseError::InvalidHeight));
    assert_eq!("".parse::<Height>(), Err(ParseError::InvalidHeight));
}
