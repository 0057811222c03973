//! Domain layer for the transaction pool.

mod config;
mod errors;
mod policy;
mod stats;

pub use config::*;
pub use errors::*;
pub use policy::*;
pub use stats::*;
