//! Crypto error types.

use thiserror::Error;

/// Hash provider failures.
///
/// These are infrastructure faults: the provider could not produce a digest.
/// Validators convert them into a `HashComputationFailed` validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Provider-internal failure
    #[error("Hash computation failed: {0}")]
    ComputationFailed(String),
}
