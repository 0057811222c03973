//! # vc-03-consensus-validation
//!
//! Judges individual consensus votes and aggregates them into a decision on
//! a proposed docket.
//!
//! ## Quorum Rule
//!
//! Consensus (and quorum) is met iff
//!
//! ```text
//! approve_count / total_validators  >  threshold      (strictly)
//! ```
//!
//! A tie at exactly the threshold fails, so a threshold of `1.0` can never
//! be met. Abstentions are tallied and reported but never count towards
//! approval; the denominator is always the full validator set, not the
//! number of votes cast.
//!
//! ## Metadata
//!
//! Quorum and consensus checks report their arithmetic in the result
//! metadata whether or not the check passes:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `approval_percentage` | approval ratio in `[0, 1]` |
//! | `threshold` | threshold the ratio was compared against |
//! | `consensus_achieved` | outcome of `check_consensus_achievement` |
//! | `approve_count` / `reject_count` / `abstain_count` | tally |
//! | `total_validators` | denominator |

pub mod domain;
pub mod metrics;

pub use domain::*;
