//! Errors that can occur when parsing block metadata.

use thiserror::Error;

/// Errors from parsing hard-coded or user-supplied block metadata strings.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not a valid hex block hash.
    #[error("block hash strings must be exactly 64 hex digits")]
    InvalidHash,

    /// The string is not a valid decimal block height.
    #[error("block heights must be decimal integers")]
    InvalidHeight,

    /// The parsed height is above [`Height::MAX`](crate::block::Height::MAX).
    #[error("block height exceeds the maximum block height")]
    HeightOverflow,
}
