//! In-memory `IncidentStore`.

use crate::domain::BadActorIncident;
use crate::ports::IncidentStore;
use dashmap::DashMap;
use shared_types::{RegisterId, Timestamp, ValidatorId};

#[derive(Default)]
pub struct InMemoryIncidentStore {
    incidents: DashMap<(RegisterId, ValidatorId), Vec<BadActorIncident>>,
}

impl InMemoryIncidentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IncidentStore for InMemoryIncidentStore {
    fn append(&self, incident: BadActorIncident) {
        let key = (incident.register_id.clone(), incident.validator_id.clone());
        self.incidents.entry(key).or_default().push(incident);
    }

    fn incidents(&self, register_id: &str, validator_id: &str) -> Vec<BadActorIncident> {
        let key = (register_id.to_string(), validator_id.to_string());
        self.incidents
            .get(&key)
            .map(|list| list.value().clone())
            .unwrap_or_default()
    }

    fn incidents_by_validator(&self, register_id: &str) -> Vec<(ValidatorId, Vec<BadActorIncident>)> {
        self.incidents
            .iter()
            .filter(|entry| entry.key().0 == register_id)
            .map(|entry| (entry.key().1.clone(), entry.value().clone()))
            .collect()
    }

    fn all(&self) -> Vec<BadActorIncident> {
        self.incidents
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect()
    }

    fn purge_older_than(&self, cutoff: Timestamp) -> usize {
        let mut removed = 0;
        self.incidents.retain(|_, list| {
            let before = list.len();
            list.retain(|incident| incident.timestamp >= cutoff);
            removed += before - list.len();
            !list.is_empty()
        });
        removed
    }
}
