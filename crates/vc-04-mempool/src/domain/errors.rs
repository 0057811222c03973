//! Mempool error types.
//!
//! Only argument-contract violations are errors. Duplicates, misses and
//! capacity overruns are reported through return values.

use shared_types::ArgumentError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MempoolError {
    /// A required identifier was blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Configuration the pool cannot run with.
    #[error("invalid mempool configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for mempool operations.
pub type MempoolResult<T> = Result<T, MempoolError>;
