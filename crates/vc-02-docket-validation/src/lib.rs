//! # vc-02-docket-validation
//!
//! Verifies a docket's self-consistency and its continuity with the previous
//! docket of the register, plus the structural checks of incoming
//! transactions (same validator family).
//!
//! ## Docket Chain
//!
//! ```text
//! [#0 GENESIS] ──hash──→ [#1 previous_hash = hash(#0)] ──hash──→ [#2 ...]
//! ```
//!
//! | Check | Method |
//! |-------|--------|
//! | Field presence, skew, genesis invariant | `validate_docket_structure` |
//! | Recomputed hash | `validate_docket_hash` |
//! | Number, register, hash link, time order | `validate_chain_continuity` |
//! | Genesis-only rules | `validate_genesis_docket` |
//!
//! ## Hash Provider
//!
//! Hashing goes through the injected [`HashProvider`](shared_crypto::HashProvider).
//! A provider failure is reported as `HashComputationFailed`, never as a
//! mismatch, and never propagates out of a validation call.

pub mod domain;

pub use domain::*;
