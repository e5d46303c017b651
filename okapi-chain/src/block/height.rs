use serde::{Deserialize, Serialize};

use super::ParseError;

/// A block's position in the chain: the number of blocks between it and the
/// genesis block, which is at height 0.
///
/// # Invariants
///
/// Callers must not construct heights above [`Height::MAX`]; string parsing
/// rejects them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

impl std::str::FromStr for Height {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse() {
            Ok(h) if Height(h) <= Height::MAX => Ok(Height(h)),
            Ok(_) => Err(ParseError::HeightOverflow),
            Err(_) => Err(ParseError::InvalidHeight),
        }
    }
}

impl Height {
    /// The genesis block height.
    ///
    /// The underlying type is unsigned, so heights below `Height::MIN` can
    /// not be constructed at all.
    pub const MIN: Height = Height(0);

    /// The highest block height this node can represent.
    ///
    /// Far above any height the chain can reach, but low enough that height
    /// arithmetic in other components can not overflow the underlying type.
    pub const MAX: Height = Height(499_999_999);
}

#[cfg(any(test, feature = "proptest-impl"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "proptest-impl"))]
impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
