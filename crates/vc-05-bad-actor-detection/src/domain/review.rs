//! Review flagging rule.

use super::config::BadActorConfig;
use super::incident::{BadActorIncident, Severity};
use serde::Serialize;
use shared_types::ValidatorId;
use std::fmt;

/// Why a validator meets the review criteria. Checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlagReason {
    CriticalIncident,
    RepeatedHighSeverity { count: usize },
    IncidentThreshold { count: usize },
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CriticalIncident => f.write_str("critical incident"),
            Self::RepeatedHighSeverity { count } => write!(f, "{} high-severity incidents", count),
            Self::IncidentThreshold { count } => write!(f, "{} incidents", count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedValidator {
    pub validator_id: ValidatorId,
    pub reason: FlagReason,
    pub incident_count: usize,
}

/// Applies the review rule to one validator's incidents.
pub fn review_reason(
    incidents: &[BadActorIncident],
    config: &BadActorConfig,
) -> Option<FlagReason> {
    if incidents.iter().any(|i| i.severity == Severity::Critical) {
        return Some(FlagReason::CriticalIncident);
    }
    let high = incidents
        .iter()
        .filter(|i| i.severity == Severity::High)
        .count();
    if high >= config.high_severity_threshold {
        return Some(FlagReason::RepeatedHighSeverity { count: high });
    }
    if incidents.len() >= config.warning_threshold {
        return Some(FlagReason::IncidentThreshold {
            count: incidents.len(),
        });
    }
    None
}
