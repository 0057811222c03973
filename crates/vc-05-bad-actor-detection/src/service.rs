//! # Bad Actor Service
//!
//! `BadActorDetector` implements [`BadActorApi`] over any [`IncidentStore`].

use crate::adapters::InMemoryIncidentStore;
use crate::domain::{
    review_reason, BadActorConfig, BadActorIncident, BadActorResult, BadActorStats,
    DocketRejectionReason, FlaggedValidator, IncidentType, Severity,
};
use crate::metrics;
use crate::ports::{BadActorApi, IncidentStore};
use async_trait::async_trait;
use shared_types::{ensure_not_blank, is_blank, TimeSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct BadActorDetector {
    store: Arc<dyn IncidentStore>,
    config: BadActorConfig,
    time_source: Arc<dyn TimeSource>,
}

impl BadActorDetector {
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(
        store: Arc<dyn IncidentStore>,
        config: BadActorConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> BadActorResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            time_source,
        })
    }

    pub fn in_memory(
        config: BadActorConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> BadActorResult<Self> {
        Self::new(Arc::new(InMemoryIncidentStore::new()), config, time_source)
    }

    pub fn config(&self) -> &BadActorConfig {
        &self.config
    }

    fn record(
        &self,
        register_id: &str,
        validator_id: &str,
        incident_type: IncidentType,
        severity: Severity,
        details: String,
    ) {
        if is_blank(register_id) || is_blank(validator_id) {
            warn!(
                register_id,
                validator_id,
                %incident_type,
                "Dropping incident with blank identifier"
            );
            return;
        }

        let incident = BadActorIncident {
            register_id: register_id.to_string(),
            validator_id: validator_id.to_string(),
            incident_type,
            severity,
            timestamp: self.time_source.now(),
            details,
        };

        match severity {
            Severity::Critical | Severity::High => warn!(
                register_id,
                validator_id,
                %incident_type,
                %severity,
                details = %incident.details,
                "Validator misbehaviour recorded"
            ),
            Severity::Info => debug!(
                register_id,
                validator_id,
                %incident_type,
                details = %incident.details,
                "Validator incident recorded"
            ),
        }

        self.store.append(incident);
        metrics::record_incident(incident_type, severity);

        let incidents = self.store.incidents(register_id, validator_id);
        if let Some(reason) = review_reason(&incidents, &self.config) {
            info!(register_id, validator_id, %reason, "Validator meets review criteria");
        }
    }
}

#[async_trait]
impl BadActorApi for BadActorDetector {
    async fn log_docket_rejection(
        &self,
        register_id: &str,
        initiator_id: &str,
        docket_id: &str,
        reason: DocketRejectionReason,
        details: &str,
    ) {
        let mut text = format!("Docket {} rejected: {}", docket_id, reason);
        if !is_blank(details) {
            text.push_str(". ");
            text.push_str(details.trim());
        }
        self.record(
            register_id,
            initiator_id,
            IncidentType::InvalidDocketProposed,
            reason.severity(),
            text,
        );
    }

    async fn log_transaction_validation_failure(
        &self,
        register_id: &str,
        sender_id: &str,
        transaction_id: &str,
        error_type: &str,
    ) {
        self.record(
            register_id,
            sender_id,
            IncidentType::InvalidTransactionSubmitted,
            Severity::Info,
            format!("Transaction {} failed validation: {}", transaction_id, error_type),
        );
    }

    async fn log_double_vote(&self, register_id: &str, validator_id: &str, docket_id: &str, term: u64) {
        self.record(
            register_id,
            validator_id,
            IncidentType::DoubleVoteAttempt,
            Severity::High,
            format!("Second vote in term {} (docket {})", term, docket_id),
        );
    }

    async fn log_leader_impersonation(
        &self,
        register_id: &str,
        fake_leader_id: &str,
        actual_leader_id: &str,
        term: u64,
    ) {
        self.record(
            register_id,
            fake_leader_id,
            IncidentType::LeaderImpersonation,
            Severity::Critical,
            format!(
                "Claimed leadership in term {}; actual leader is {}",
                term, actual_leader_id
            ),
        );
    }

    async fn log_invalid_vote(
        &self,
        register_id: &str,
        validator_id: &str,
        docket_hash: &str,
        reason: &str,
    ) {
        self.record(
            register_id,
            validator_id,
            IncidentType::InvalidVoteSubmitted,
            Severity::Info,
            format!("Invalid vote for docket {}: {}", docket_hash, reason),
        );
    }

    async fn get_rejection_count(
        &self,
        register_id: &str,
        validator_id: &str,
        window: Duration,
    ) -> BadActorResult<usize> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("validator_id", validator_id)?;
        let window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        let since = self.time_source.now().saturating_sub(window_ms);
        Ok(self
            .store
            .incidents(register_id, validator_id)
            .iter()
            .filter(|incident| incident.timestamp >= since)
            .count())
    }

    async fn get_incidents(
        &self,
        register_id: &str,
        validator_id: &str,
        limit: Option<usize>,
    ) -> BadActorResult<Vec<BadActorIncident>> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("validator_id", validator_id)?;
        let mut incidents = self.store.incidents(register_id, validator_id);
        // Stored oldest first. Reversing before the stable sort keeps later
        // inserts first within one millisecond.
        incidents.reverse();
        incidents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = limit {
            incidents.truncate(limit);
        }
        Ok(incidents)
    }

    async fn should_flag_for_review(
        &self,
        register_id: &str,
        validator_id: &str,
    ) -> BadActorResult<bool> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("validator_id", validator_id)?;
        let incidents = self.store.incidents(register_id, validator_id);
        Ok(review_reason(&incidents, &self.config).is_some())
    }

    async fn get_flagged_validators(
        &self,
        register_id: &str,
    ) -> BadActorResult<Vec<FlaggedValidator>> {
        ensure_not_blank("register_id", register_id)?;
        let mut flagged: Vec<FlaggedValidator> = self
            .store
            .incidents_by_validator(register_id)
            .into_iter()
            .filter_map(|(validator_id, incidents)| {
                review_reason(&incidents, &self.config).map(|reason| FlaggedValidator {
                    validator_id,
                    reason,
                    incident_count: incidents.len(),
                })
            })
            .collect();
        flagged.sort_by(|a, b| a.validator_id.cmp(&b.validator_id));
        Ok(flagged)
    }

    async fn cleanup_expired_incidents(&self) -> usize {
        let cutoff = self.time_source.now().saturating_sub(self.config.retention_ms);
        let removed = self.store.purge_older_than(cutoff);
        if removed > 0 {
            info!(removed, cutoff, "Expired incidents purged");
        }
        removed
    }

    async fn get_stats(&self) -> BadActorStats {
        BadActorStats::from_incidents(&self.store.all())
    }
}
