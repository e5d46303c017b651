//! Chain parameters for each Okapi network.
//!
//! Parameters that differ between the production network and the test network
//! are accessed via a function that takes a [`Network`].

mod genesis;
mod network;

pub use genesis::*;
pub use network::{InvalidNetworkError, Network};
