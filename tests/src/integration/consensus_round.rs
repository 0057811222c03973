//! # Consensus Round Flows
//!
//! A sealed docket is put to a vote; the round is validated and tallied.

#[cfg(test)]
mod tests {
    use crate::fixtures::{clock, docket_validator, sealed_docket, seven_two_one, vote, NOW};
    use proptest::prelude::*;
    use serde_json::json;
    use shared_types::{ErrorCode, ManualTimeSource, VoteDecision};
    use std::sync::Arc;
    use vc_03_consensus_validation::{ConsensusValidationConfig, ConsensusValidator};

    fn consensus(clock: Arc<ManualTimeSource>) -> ConsensusValidator {
        ConsensusValidator::new(ConsensusValidationConfig::default(), clock)
    }

    #[test]
    fn test_seven_of_ten_clears_two_thirds() {
        let time = clock();
        let docket = sealed_docket(&docket_validator(time.clone()), 0, None, NOW - 1_000);
        let validator = consensus(time);
        let votes = seven_two_one(&docket.docket_hash);

        let collection = validator.validate_vote_collection(&votes, &docket.docket_hash);
        assert!(collection.is_valid(), "{:?}", collection.errors);

        let result = validator.check_consensus_achievement(&votes, 10, 0.66);
        assert!(result.is_valid());
        assert_eq!(result.metadata["consensus_achieved"], json!(true));
        assert_eq!(result.metadata["approve_count"], json!(7));
        assert_eq!(result.metadata["reject_count"], json!(2));
        assert_eq!(result.metadata["abstain_count"], json!(1));
        assert_eq!(result.metadata["approval_percentage"], json!(0.7));
    }

    #[test]
    fn test_vote_for_other_docket_is_flagged_in_collection() {
        let validator = consensus(clock());
        let mut votes = seven_two_one("docket-hash");
        votes[3].docket_hash = "other-docket".to_string();

        let result = validator.validate_vote_collection(&votes, "docket-hash");
        assert!(result.has_error(ErrorCode::DocketHashMismatch));
        assert!(result
            .errors
            .iter()
            .any(|e| e.message.starts_with("Vote[3]")));
    }

    #[test]
    fn test_exactly_half_is_not_a_majority() {
        let validator = consensus(clock());
        let votes: Vec<_> = (0..10)
            .map(|i| {
                let decision = if i < 5 {
                    VoteDecision::Approve
                } else {
                    VoteDecision::Reject
                };
                vote(&format!("validator-{}", i), "h", decision)
            })
            .collect();

        let result = validator.check_consensus_achievement(&votes, 10, 0.5);
        assert!(!result.is_valid());
        assert_eq!(result.metadata["consensus_achieved"], json!(false));
        assert!(validator.validate_quorum(5, 10, 0.5).has_error(ErrorCode::QuorumNotMet));
        assert!(validator.validate_quorum(6, 10, 0.5).is_valid());
    }

    #[test]
    fn test_future_vote_rejected_until_clock_catches_up() {
        let time = clock();
        let validator = consensus(time.clone());
        let mut early = vote("validator-1", "h", VoteDecision::Approve);
        early.voted_at = NOW + ConsensusValidationConfig::default().max_clock_skew_ms + 1;

        assert!(validator
            .validate_vote_structure(&early, "h")
            .has_error(ErrorCode::FutureTimestamp));

        time.advance(1);
        assert!(validator.validate_vote_structure(&early, "h").is_valid());
    }

    proptest! {
        #[test]
        fn prop_quorum_met_iff_strictly_above_threshold(
            total in 1i64..500,
            approvals_frac in 0.0f64..=1.0,
            threshold in 0.0f64..=1.0,
        ) {
            let approvals = ((total as f64) * approvals_frac).floor() as i64;
            let validator = consensus(clock());
            let result = validator.validate_quorum(approvals, total, threshold);
            let expected = (approvals as f64) / (total as f64) > threshold;
            prop_assert_eq!(result.is_valid(), expected);
        }
    }
}
