//! # Consensus Validation Metrics
//!
//! Enable with the `metrics` feature:
//! ```toml
//! vc-03-consensus-validation = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `vc_consensus_rounds_total{outcome}` - Consensus checks by outcome

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Consensus checks, labeled by outcome
    pub static ref CONSENSUS_ROUNDS: IntCounterVec = register_int_counter_vec!(
        "vc_consensus_rounds_total",
        "Total number of consensus achievement checks",
        &["outcome"]
    )
    .expect("Failed to create CONSENSUS_ROUNDS metric");
}

#[cfg(feature = "metrics")]
pub fn record_consensus_achieved() {
    CONSENSUS_ROUNDS.with_label_values(&["achieved"]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_consensus_failed() {
    CONSENSUS_ROUNDS.with_label_values(&["not_achieved"]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_consensus_achieved() {}

#[cfg(not(feature = "metrics"))]
pub fn record_consensus_failed() {}
