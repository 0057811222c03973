//! # vc-01-chain-validation
//!
//! Decides what kind of chain entry a transaction is and whether it legally
//! extends its predecessor in the register's transaction chain.
//!
//! ## Chain Shape
//!
//! ```text
//! [Genesis] ──→ [BlueprintPublication bp-A v1] ──→ [bp-A v2]
//!     │                    │
//!     │                    └──→ [InstanceInitiation (action 0)] ──→ [InstanceAction 1] ──→ ...
//!     │
//!     └──→ [BlueprintPublication bp-B v1]      (independent lineage, not a fork)
//! ```
//!
//! ## Rules
//!
//! | Rule | Error |
//! |------|-------|
//! | Genesis must not reference a predecessor | `GenesisViolation` |
//! | Non-genesis must reference the supplied predecessor | `InvalidPreviousId` |
//! | Same register as the predecessor | `BrokenChain` |
//! | Timestamp not earlier than the predecessor | `InvalidTimestamp` |
//! | Blueprint publication carries a blueprint id | `MissingBlueprintId` |
//! | New blueprint version keeps the blueprint id | `InvalidBlueprintVersion` |
//! | Blueprint publication never follows an action | `BrokenChain` |
//! | Action 0 follows its blueprint publication | `InvalidActionSequence` / `BrokenChain` |
//! | Action n > 0 follows an action | `InvalidActionSequence` |
//!
//! The validator is pure: it reads its arguments, returns a
//! [`ValidationResult`](shared_types::ValidationResult) and mutates nothing,
//! so any number of callers may share one instance.

pub mod domain;

pub use domain::*;
