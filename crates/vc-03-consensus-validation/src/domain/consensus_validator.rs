//! Vote, quorum and consensus rules.

use super::config::ConsensusValidationConfig;
use super::tally::VoteTally;
use crate::metrics;
use shared_types::{
    is_blank, is_blank_opt, require_non_blank, ConsensusVote, ErrorCode, TimeSource,
    ValidationError, ValidationResult, VoteDecision,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Consensus validator.
///
/// Stateless apart from its configuration and clock; any number of tasks
/// may share one instance.
pub struct ConsensusValidator {
    config: ConsensusValidationConfig,
    time_source: Arc<dyn TimeSource>,
}

impl ConsensusValidator {
    pub fn new(config: ConsensusValidationConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            config,
            time_source,
        }
    }

    /// Checks one vote against the docket under vote. All checks co-reported.
    pub fn validate_vote_structure(
        &self,
        vote: &ConsensusVote,
        expected_docket_hash: &str,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        require_non_blank(&mut result, "ValidatorId", &vote.validator_id);
        require_non_blank(&mut result, "DocketHash", &vote.docket_hash);
        if is_blank(&vote.signature) {
            result.push(ValidationError::for_field(
                ErrorCode::MissingSignature,
                "Signature",
                "Signature is required",
            ));
        }

        if !is_blank(&vote.docket_hash) && vote.docket_hash != expected_docket_hash {
            result.push(ValidationError::for_field(
                ErrorCode::DocketHashMismatch,
                "DocketHash",
                format!(
                    "Vote is for docket {} but expected docket {}",
                    vote.docket_hash, expected_docket_hash
                ),
            ));
        }

        if !vote.decision.is_defined() {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidDecision,
                "Decision",
                format!("Unrecognized vote decision: {}", vote.decision),
            ));
        }

        let now = self.time_source.now();
        if vote.voted_at > now.saturating_add(self.config.max_clock_skew_ms) {
            result.push(ValidationError::for_field(
                ErrorCode::FutureTimestamp,
                "VotedAt",
                format!(
                    "VotedAt {} is more than {} ms in the future (now: {})",
                    vote.voted_at, self.config.max_clock_skew_ms, now
                ),
            ));
        }

        if vote.decision == VoteDecision::Reject && is_blank_opt(vote.rejection_reason.as_deref()) {
            result.push(ValidationError::for_field(
                ErrorCode::MissingRejectionReason,
                "RejectionReason",
                "A Reject vote must state a rejection reason",
            ));
        }

        result
    }

    /// Quorum arithmetic: met iff `approval_count / total_validators > threshold`.
    ///
    /// Each violated precondition is reported as its own error.
    pub fn validate_quorum(
        &self,
        approval_count: i64,
        total_validators: i64,
        threshold: f64,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if approval_count < 0 {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidApprovalCount,
                "ApprovalCount",
                format!("Approval count must not be negative, got {}", approval_count),
            ));
        }
        push_total_error(&mut result, total_validators);
        push_threshold_error(&mut result, threshold);
        if total_validators > 0 && approval_count > total_validators {
            result.push(ValidationError::for_field(
                ErrorCode::ApprovalsExceedTotal,
                "ApprovalCount",
                format!(
                    "Approval count {} exceeds total validators {}",
                    approval_count, total_validators
                ),
            ));
        }

        if approval_count >= 0 && total_validators > 0 {
            let percentage = approval_count as f64 / total_validators as f64;
            result.insert_metadata("approval_percentage", percentage);
            result.insert_metadata("threshold", threshold);

            if result.is_valid() && percentage <= threshold {
                result.push(ValidationError::new(
                    ErrorCode::QuorumNotMet,
                    format!(
                        "Quorum not met: {}/{} approvals ({:.4}) must exceed threshold {}",
                        approval_count, total_validators, percentage, threshold
                    ),
                ));
            }
        }

        result
    }

    /// Validates every vote of a round plus collection-level rules.
    pub fn validate_vote_collection(
        &self,
        votes: &[ConsensusVote],
        expected_docket_hash: &str,
    ) -> ValidationResult {
        if votes.is_empty() {
            return ValidationResult::invalid(ValidationError::new(
                ErrorCode::EmptyVoteCollection,
                "Vote collection must not be empty",
            ));
        }

        let mut result = ValidationResult::valid();
        for (i, vote) in votes.iter().enumerate() {
            let context = format!("Vote[{}]", i);
            for error in self.validate_vote_structure(vote, expected_docket_hash).errors {
                result.push(error.with_context(&context));
            }
        }

        // Keyed by lower-cased id; keeps every spelling in arrival order.
        let mut seen: HashMap<String, Vec<&str>> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for vote in votes.iter().filter(|v| !is_blank(&v.validator_id)) {
            let key = vote.validator_id.trim().to_lowercase();
            let spellings = seen.entry(key.clone()).or_default();
            if spellings.is_empty() {
                order.push(key);
            }
            spellings.push(vote.validator_id.as_str());
        }
        let duplicates: Vec<String> = order
            .iter()
            .filter_map(|key| seen.get(key).filter(|ids| ids.len() > 1))
            .flat_map(|ids| ids.iter().map(|id| id.to_string()))
            .collect();
        if !duplicates.is_empty() {
            result.push(ValidationError::for_field(
                ErrorCode::DuplicateValidator,
                "ValidatorId",
                format!("Duplicate validator votes: {}", duplicates.join(", ")),
            ));
        }

        debug!(
            docket_hash = %expected_docket_hash,
            votes = votes.len(),
            errors = result.errors.len(),
            "Vote collection validated"
        );
        result
    }

    /// Tallies `votes` and decides whether consensus was achieved.
    ///
    /// The tally is always present in the metadata, including on failure.
    pub fn check_consensus_achievement(
        &self,
        votes: &[ConsensusVote],
        total_validators: i64,
        threshold: f64,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();
        push_total_error(&mut result, total_validators);
        push_threshold_error(&mut result, threshold);
        if !result.is_valid() {
            return result;
        }

        let tally = self.tally_votes(votes, total_validators as u64, threshold);
        tally.write_metadata(&mut result);

        if tally.consensus_achieved {
            info!(
                approve = tally.approve_count,
                total = tally.total_validators,
                "Consensus achieved"
            );
            metrics::record_consensus_achieved();
        } else {
            result.push(ValidationError::new(
                ErrorCode::ConsensusNotAchieved,
                format!(
                    "Consensus not achieved: {} approve, {} reject, {} abstain of {} validators ({:.4} must exceed {})",
                    tally.approve_count,
                    tally.reject_count,
                    tally.abstain_count,
                    tally.total_validators,
                    tally.approval_percentage,
                    threshold
                ),
            ));
            metrics::record_consensus_failed();
        }
        result
    }

    /// Typed tally without precondition checks.
    pub fn tally_votes(&self, votes: &[ConsensusVote], total_validators: u64, threshold: f64) -> VoteTally {
        VoteTally::from_votes(votes, total_validators, threshold)
    }
}

fn push_total_error(result: &mut ValidationResult, total_validators: i64) {
    if total_validators <= 0 {
        result.push(ValidationError::for_field(
            ErrorCode::InvalidTotalValidators,
            "TotalValidators",
            format!("Total validators must be positive, got {}", total_validators),
        ));
    }
}

fn push_threshold_error(result: &mut ValidationResult, threshold: f64) {
    if !(0.0..=1.0).contains(&threshold) {
        result.push(ValidationError::for_field(
            ErrorCode::InvalidThreshold,
            "Threshold",
            format!("Threshold must be within [0.0, 1.0], got {}", threshold),
        ));
    }
}
