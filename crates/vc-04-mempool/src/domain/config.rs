//! Mempool configuration.

use super::errors::MempoolError;
use serde::Deserialize;
use shared_types::MINUTE_MS;
use std::env;

/// Mempool configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MempoolConfig {
    /// Soft per-register size; exceeding it is logged, never refused.
    pub max_size: usize,
    /// Lifetime of transactions without an explicit `expires_at`.
    /// `None` keeps such transactions until they are removed.
    pub default_ttl_ms: Option<u64>,
    /// Interval of the background expiry sweep.
    pub cleanup_interval_ms: u64,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10_000,
            default_ttl_ms: None,
            cleanup_interval_ms: MINUTE_MS,
        }
    }
}

impl MempoolConfig {
    /// Small pool and fast sweep for tests.
    pub fn for_testing() -> Self {
        Self {
            max_size: 10,
            default_ttl_ms: None,
            cleanup_interval_ms: 50,
        }
    }

    /// Defaults overridden by `VC_MEMPOOL_MAX_SIZE`, `VC_MEMPOOL_DEFAULT_TTL_MS`
    /// and `VC_MEMPOOL_CLEANUP_INTERVAL_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(max_size) = parse_env("VC_MEMPOOL_MAX_SIZE") {
            config.max_size = max_size;
        }
        if let Some(ttl) = parse_env::<u64>("VC_MEMPOOL_DEFAULT_TTL_MS") {
            config.default_ttl_ms = (ttl > 0).then_some(ttl);
        }
        if let Some(interval) = parse_env("VC_MEMPOOL_CLEANUP_INTERVAL_MS") {
            config.cleanup_interval_ms = interval;
        }
        config
    }

    /// Rejects settings the pool cannot run with.
    pub fn validate(&self) -> Result<(), MempoolError> {
        if self.max_size == 0 {
            return Err(MempoolError::InvalidConfig(
                "max_size must be positive".into(),
            ));
        }
        if self.default_ttl_ms == Some(0) {
            return Err(MempoolError::InvalidConfig(
                "default_ttl_ms must be positive when set".into(),
            ));
        }
        if self.cleanup_interval_ms == 0 {
            return Err(MempoolError::InvalidConfig(
                "cleanup_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
