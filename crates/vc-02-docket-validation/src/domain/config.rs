//! Docket validation configuration.

use serde::Deserialize;
use shared_crypto::HashAlgorithm;
use shared_types::MINUTE_MS;
use std::env;

/// Configuration shared by the docket and transaction validators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocketValidationConfig {
    /// How far into the future a timestamp may lie (milliseconds).
    pub max_clock_skew_ms: u64,
    /// Digest used for docket and payload hashes.
    #[serde(skip)]
    pub hash_algorithm: HashAlgorithm,
}

impl Default for DocketValidationConfig {
    fn default() -> Self {
        Self {
            max_clock_skew_ms: 5 * MINUTE_MS,
            hash_algorithm: HashAlgorithm::Sha256,
        }
    }
}

impl DocketValidationConfig {
    /// Tight skew tolerance so tests can cross the boundary cheaply.
    pub fn for_testing() -> Self {
        Self {
            max_clock_skew_ms: 1_000,
            ..Self::default()
        }
    }

    /// Defaults overridden by `VC_MAX_CLOCK_SKEW_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(skew) = env::var("VC_MAX_CLOCK_SKEW_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_clock_skew_ms = skew;
        }
        config
    }
}
