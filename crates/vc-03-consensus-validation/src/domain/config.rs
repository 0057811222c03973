//! Consensus validation configuration.

use serde::Deserialize;
use shared_types::MINUTE_MS;
use std::env;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsensusValidationConfig {
    /// How far into the future `voted_at` may lie (milliseconds).
    pub max_clock_skew_ms: u64,
}

impl Default for ConsensusValidationConfig {
    fn default() -> Self {
        Self {
            max_clock_skew_ms: 5 * MINUTE_MS,
        }
    }
}

impl ConsensusValidationConfig {
    pub fn for_testing() -> Self {
        Self {
            max_clock_skew_ms: 1_000,
        }
    }

    /// Defaults overridden by `VC_VOTE_CLOCK_SKEW_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(skew) = env::var("VC_VOTE_CLOCK_SKEW_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_clock_skew_ms = skew;
        }
        config
    }
}
