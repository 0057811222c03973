//! # Outbound Port - IncidentStore
//!
//! Append-only incident lists keyed by (register, validator).

use crate::domain::BadActorIncident;
use shared_types::{Timestamp, ValidatorId};

pub trait IncidentStore: Send + Sync {
    fn append(&self, incident: BadActorIncident);

    /// Incidents of one pair in insertion order.
    fn incidents(&self, register_id: &str, validator_id: &str) -> Vec<BadActorIncident>;

    /// Every validator of `register_id` with its incidents.
    fn incidents_by_validator(&self, register_id: &str) -> Vec<(ValidatorId, Vec<BadActorIncident>)>;

    fn all(&self) -> Vec<BadActorIncident>;

    /// Drops incidents with `timestamp < cutoff`; returns how many.
    fn purge_older_than(&self, cutoff: Timestamp) -> usize;
}
