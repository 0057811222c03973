//! Domain layer for misbehaviour tracking.

mod config;
mod errors;
mod incident;
mod review;
mod stats;

pub use config::*;
pub use errors::*;
pub use incident::*;
pub use review::*;
pub use stats::*;
