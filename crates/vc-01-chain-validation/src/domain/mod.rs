//! Domain layer for chain validation.
//!
//! - `chain_validator`: type inference and linkage rules

mod chain_validator;

pub use chain_validator::*;
