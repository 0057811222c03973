//! # Inbound Port - BadActorApi
//!
//! Recording methods return nothing: they never fail and never block the
//! caller. Query methods only fail on blank identifiers.

use crate::domain::{
    BadActorIncident, BadActorResult, BadActorStats, DocketRejectionReason, FlaggedValidator,
};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait BadActorApi: Send + Sync {
    /// Records a rejected docket against its initiator; severity follows `reason`.
    async fn log_docket_rejection(
        &self,
        register_id: &str,
        initiator_id: &str,
        docket_id: &str,
        reason: DocketRejectionReason,
        details: &str,
    );

    /// Records an invalid transaction submission (Info).
    async fn log_transaction_validation_failure(
        &self,
        register_id: &str,
        sender_id: &str,
        transaction_id: &str,
        error_type: &str,
    );

    /// Records two votes by one validator in the same term (High).
    async fn log_double_vote(&self, register_id: &str, validator_id: &str, docket_id: &str, term: u64);

    /// Records a validator claiming leadership it does not hold (Critical).
    async fn log_leader_impersonation(
        &self,
        register_id: &str,
        fake_leader_id: &str,
        actual_leader_id: &str,
        term: u64,
    );

    /// Records a vote that failed validation (Info).
    async fn log_invalid_vote(
        &self,
        register_id: &str,
        validator_id: &str,
        docket_hash: &str,
        reason: &str,
    );

    /// Incidents of any type for the pair within the trailing `window`.
    async fn get_rejection_count(
        &self,
        register_id: &str,
        validator_id: &str,
        window: Duration,
    ) -> BadActorResult<usize>;

    /// Most recent first, capped at `limit` when given.
    async fn get_incidents(
        &self,
        register_id: &str,
        validator_id: &str,
        limit: Option<usize>,
    ) -> BadActorResult<Vec<BadActorIncident>>;

    async fn should_flag_for_review(
        &self,
        register_id: &str,
        validator_id: &str,
    ) -> BadActorResult<bool>;

    /// Validators of `register_id` currently meeting the review criteria.
    async fn get_flagged_validators(
        &self,
        register_id: &str,
    ) -> BadActorResult<Vec<FlaggedValidator>>;

    /// Purges incidents older than the retention period; returns how many.
    async fn cleanup_expired_incidents(&self) -> usize;

    async fn get_stats(&self) -> BadActorStats;
}
