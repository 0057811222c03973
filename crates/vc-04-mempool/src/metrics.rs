//! # Mempool Metrics
//!
//! Enable with the `metrics` feature.
//!
//! ## Metrics Exported
//!
//! - `vc_mempool_admitted_total` - Transactions admitted
//! - `vc_mempool_duplicates_total` - Admissions refused as duplicates
//! - `vc_mempool_expired_total` - Transactions removed by expiry sweeps

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref ADMITTED: IntCounter = register_int_counter!(
        "vc_mempool_admitted_total",
        "Total number of transactions admitted to the pool"
    )
    .expect("Failed to create ADMITTED metric");

    pub static ref DUPLICATES: IntCounter = register_int_counter!(
        "vc_mempool_duplicates_total",
        "Total number of duplicate admissions ignored"
    )
    .expect("Failed to create DUPLICATES metric");

    pub static ref EXPIRED: IntCounter = register_int_counter!(
        "vc_mempool_expired_total",
        "Total number of transactions removed on expiry"
    )
    .expect("Failed to create EXPIRED metric");
}

#[cfg(feature = "metrics")]
pub fn record_admitted() {
    ADMITTED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_duplicate() {
    DUPLICATES.inc();
}

#[cfg(feature = "metrics")]
pub fn record_expired(count: usize) {
    EXPIRED.inc_by(count as u64);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_admitted() {}

#[cfg(not(feature = "metrics"))]
pub fn record_duplicate() {}

#[cfg(not(feature = "metrics"))]
pub fn record_expired(_count: usize) {}
