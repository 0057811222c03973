use serde::Serialize;
use shared_types::{ConsensusVote, ValidationResult, VoteDecision};

/// Typed tally of a vote round.
///
/// The same numbers are mirrored into the metadata of
/// `check_consensus_achievement`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteTally {
    pub approve_count: u64,
    pub reject_count: u64,
    pub abstain_count: u64,
    /// Votes whose decision is outside the defined set. Never counted as approval.
    pub unrecognized_count: u64,
    pub total_validators: u64,
    /// `approve_count / total_validators`.
    pub approval_percentage: f64,
    pub threshold: f64,
    pub consensus_achieved: bool,
}

impl VoteTally {
    /// Tallies `votes` against a validator set of `total_validators`.
    ///
    /// `total_validators` must be positive; callers validate it first.
    pub fn from_votes(votes: &[ConsensusVote], total_validators: u64, threshold: f64) -> Self {
        let mut tally = Self {
            approve_count: 0,
            reject_count: 0,
            abstain_count: 0,
            unrecognized_count: 0,
            total_validators,
            approval_percentage: 0.0,
            threshold,
            consensus_achieved: false,
        };

        for vote in votes {
            match vote.decision {
                VoteDecision::Approve => tally.approve_count += 1,
                VoteDecision::Reject => tally.reject_count += 1,
                VoteDecision::Abstain => tally.abstain_count += 1,
                VoteDecision::Unrecognized(_) => tally.unrecognized_count += 1,
            }
        }

        if total_validators > 0 {
            tally.approval_percentage = tally.approve_count as f64 / total_validators as f64;
        }
        tally.consensus_achieved = total_validators > 0 && tally.approval_percentage > threshold;
        tally
    }

    /// Votes cast with a defined decision.
    pub fn votes_cast(&self) -> u64 {
        self.approve_count + self.reject_count + self.abstain_count
    }

    /// Writes the tally into `result` metadata.
    pub fn write_metadata(&self, result: &mut ValidationResult) {
        result.insert_metadata("consensus_achieved", self.consensus_achieved);
        result.insert_metadata("approve_count", self.approve_count);
        result.insert_metadata("reject_count", self.reject_count);
        result.insert_metadata("abstain_count", self.abstain_count);
        result.insert_metadata("total_validators", self.total_validators);
        result.insert_metadata("approval_percentage", self.approval_percentage);
        result.insert_metadata("threshold", self.threshold);
    }
}
