//! # Error Types
//!
//! Argument-contract errors shared by the stateful subsystems.

use thiserror::Error;

/// A caller passed an argument that violates the operation's contract.
///
/// These indicate a caller bug, not a data-quality problem, and are the only
/// failures pool and incident operations return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required identifier was empty or whitespace.
    #[error("Argument '{0}' must not be blank")]
    Blank(&'static str),
}

/// Returns `ArgumentError::Blank(name)` when `value` is blank.
pub fn ensure_not_blank(name: &'static str, value: &str) -> Result<(), ArgumentError> {
    if value.trim().is_empty() {
        Err(ArgumentError::Blank(name))
    } else {
        Ok(())
    }
}
