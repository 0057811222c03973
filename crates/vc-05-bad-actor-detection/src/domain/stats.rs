use super::incident::{BadActorIncident, IncidentType};
use serde::Serialize;
use shared_types::Timestamp;
use std::collections::{BTreeMap, HashSet};

/// Ledger-wide statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BadActorStats {
    pub total_incidents: usize,
    /// Distinct (register, validator) pairs with at least one incident.
    pub distinct_validators: usize,
    pub incidents_by_type: BTreeMap<IncidentType, usize>,
    pub oldest_incident_at: Option<Timestamp>,
}

impl BadActorStats {
    pub fn from_incidents<'a>(incidents: impl IntoIterator<Item = &'a BadActorIncident>) -> Self {
        let mut stats = Self::default();
        let mut pairs = HashSet::new();
        for incident in incidents {
            stats.total_incidents += 1;
            pairs.insert((incident.register_id.as_str(), incident.validator_id.as_str()));
            *stats.incidents_by_type.entry(incident.incident_type).or_insert(0) += 1;
            stats.oldest_incident_at = Some(
                stats
                    .oldest_incident_at
                    .map_or(incident.timestamp, |oldest| oldest.min(incident.timestamp)),
            );
        }
        stats.distinct_validators = pairs.len();
        stats
    }
}
