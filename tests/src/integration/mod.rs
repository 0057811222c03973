//! Cross-subsystem integration tests.

pub mod concurrency;
pub mod consensus_round;
pub mod docket_chain;
pub mod misbehaviour;
pub mod pipeline;
