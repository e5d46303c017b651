//! Implementation of Okapi consensus checks.
//!
//! This crate implements the checks that depend on hard-coded chain data:
//! checkpoint verification against known-good chain history, and the
//! initial-sync progress estimate calibrated from the same tables.
//!
//! *Structural validity* is enforced by the data structures in `okapi-chain`.
//! *Contextual validity*, or whether a block is actually valid in the context
//! of a particular chain state, is enforced by the node when blocks are
//! committed to its state.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::try_err)]

mod config;

pub mod checkpoint;

pub use config::Config;

/// A boxed error type for building consensus data.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
