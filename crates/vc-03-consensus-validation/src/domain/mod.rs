//! Domain layer for consensus validation.
//!
//! - `config`: skew tolerance
//! - `tally`: typed vote tally
//! - `consensus_validator`: vote, quorum and collection rules

mod config;
mod consensus_validator;
mod tally;

pub use config::*;
pub use consensus_validator::*;
pub use tally::*;
