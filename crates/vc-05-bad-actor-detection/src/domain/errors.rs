use shared_types::ArgumentError;
use thiserror::Error;

/// Errors of the incident query surface and configuration.
///
/// Recording operations never return errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BadActorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("invalid bad actor configuration: {0}")]
    InvalidConfig(String),
}

pub type BadActorResult<T> = Result<T, BadActorError>;
