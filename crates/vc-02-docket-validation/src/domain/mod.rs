//! Domain layer for docket and transaction validation.
//!
//! - `config`: skew tolerance and hash algorithm
//! - `docket_validator`: docket structure, hash and continuity rules
//! - `transaction_validator`: incoming transaction structure rules

mod config;
mod docket_validator;
mod transaction_validator;

pub use config::*;
pub use docket_validator::*;
pub use transaction_validator::*;
