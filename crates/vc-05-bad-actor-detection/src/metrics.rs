//! # Bad Actor Metrics
//!
//! Enable with the `metrics` feature.
//!
//! ## Metrics Exported
//!
//! - `vc_bad_actor_incidents_total{type, severity}` - Recorded incidents

use crate::domain::{IncidentType, Severity};

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref INCIDENTS: IntCounterVec = register_int_counter_vec!(
        "vc_bad_actor_incidents_total",
        "Total number of validator incidents recorded",
        &["type", "severity"]
    )
    .expect("Failed to create INCIDENTS metric");
}

#[cfg(feature = "metrics")]
pub fn record_incident(incident_type: IncidentType, severity: Severity) {
    INCIDENTS
        .with_label_values(&[&incident_type.to_string(), &severity.to_string()])
        .inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_incident(_incident_type: IncidentType, _severity: Severity) {}
