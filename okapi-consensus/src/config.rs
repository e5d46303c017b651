//! Consensus configuration.

use serde::{Deserialize, Serialize};

/// Configuration for consensus checks.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Should the node reject chain histories that diverge from the
    /// hard-coded checkpoints?
    ///
    /// # Security
    ///
    /// Disabling this option leaves your node open to deep chain
    /// reorganizations below the highest checkpoint.
    ///
    /// # Details
    ///
    /// This option is `true` by default. Checkpoints are an optional
    /// hardening feature, not a consensus rule: a node with checkpoints
    /// disabled accepts every history that passes full validation.
    pub checkpoints: bool,
}

// we like our default configs to be explicit
impl Default for Config {
    fn default() -> Self {
        Self { checkpoints: true }
    }
}
