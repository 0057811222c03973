//! Bad actor detection configuration.

use super::errors::BadActorError;
use serde::Deserialize;
use shared_types::DAY_MS;
use std::env;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BadActorConfig {
    /// Incidents older than this are purged by `cleanup_expired_incidents`.
    pub retention_ms: u64,
    /// Total incident count that flags a validator for review.
    pub warning_threshold: usize,
    /// High-severity incident count that flags a validator for review.
    pub high_severity_threshold: usize,
}

impl Default for BadActorConfig {
    fn default() -> Self {
        Self {
            retention_ms: 7 * DAY_MS,
            warning_threshold: 5,
            high_severity_threshold: 2,
        }
    }
}

impl BadActorConfig {
    pub fn for_testing() -> Self {
        Self {
            retention_ms: 60_000,
            warning_threshold: 3,
            high_severity_threshold: 2,
        }
    }

    /// Defaults overridden by `VC_BAD_ACTOR_RETENTION_MS` and
    /// `VC_BAD_ACTOR_WARNING_THRESHOLD`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(retention) = env::var("VC_BAD_ACTOR_RETENTION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.retention_ms = retention;
        }
        if let Some(threshold) = env::var("VC_BAD_ACTOR_WARNING_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.warning_threshold = threshold;
        }
        config
    }

    pub fn validate(&self) -> Result<(), BadActorError> {
        if self.retention_ms == 0 {
            return Err(BadActorError::InvalidConfig(
                "retention_ms must be positive".into(),
            ));
        }
        if self.warning_threshold == 0 || self.high_severity_threshold == 0 {
            return Err(BadActorError::InvalidConfig(
                "review thresholds must be positive".into(),
            ));
        }
        Ok(())
    }
}
