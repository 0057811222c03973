//! # Validator Core Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs        # Builders for dockets, votes and transactions
//! └── integration/       # Cross-subsystem flows
//!     ├── docket_chain.rs
//!     ├── consensus_round.rs
//!     ├── misbehaviour.rs
//!     ├── pipeline.rs
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vc-tests
//! cargo test -p vc-tests integration::pipeline::
//! ```

pub mod fixtures;
pub mod integration;
