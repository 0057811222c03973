//! # Misbehaviour Flows
//!
//! Validation failures in docket and consensus checks turn into incidents
//! against the validator responsible, and the review rule picks them up.

#[cfg(test)]
mod tests {
    use crate::fixtures::{clock, docket_validator, sealed_docket, vote, NOW, REGISTER};
    use shared_types::{ErrorCode, ManualTimeSource, VoteDecision, DAY_MS};
    use std::sync::Arc;
    use std::time::Duration;
    use vc_03_consensus_validation::{ConsensusValidationConfig, ConsensusValidator};
    use vc_05_bad_actor_detection::{
        BadActorApi, BadActorConfig, BadActorDetector, DocketRejectionReason, FlagReason,
        IncidentType,
    };

    fn detector(clock: Arc<ManualTimeSource>) -> BadActorDetector {
        BadActorDetector::in_memory(BadActorConfig::default(), clock).unwrap()
    }

    #[tokio::test]
    async fn test_single_impersonation_flags_immediately() {
        let detector = detector(clock());

        detector
            .log_leader_impersonation(REGISTER, "validator-9", "validator-0", 42)
            .await;

        assert!(detector
            .should_flag_for_review(REGISTER, "validator-9")
            .await
            .unwrap());
        assert_eq!(
            detector
                .get_rejection_count(REGISTER, "validator-9", Duration::from_secs(3600))
                .await
                .unwrap(),
            1
        );
        // The legitimate leader is untouched.
        assert!(!detector
            .should_flag_for_review(REGISTER, "validator-0")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_tampered_docket_is_charged_to_its_proposer() {
        let time = clock();
        let validator = docket_validator(time.clone());
        let detector = detector(time);

        let mut docket = sealed_docket(&validator, 0, None, NOW - 1_000);
        let seal = docket.docket_hash.clone();
        docket.merkle_root = "forged-root".to_string();

        let result = validator.validate_docket_hash(&docket, &seal);
        assert!(result.has_error(ErrorCode::HashMismatch));

        detector
            .log_docket_rejection(
                &docket.register_id,
                &docket.proposer_validator_id,
                &docket.docket_id,
                DocketRejectionReason::InvalidDocketHash,
                &result.errors[0].message,
            )
            .await;
        assert!(!detector
            .should_flag_for_review(REGISTER, &docket.proposer_validator_id)
            .await
            .unwrap());

        // A second high-severity rejection crosses the review line.
        detector
            .log_docket_rejection(
                &docket.register_id,
                &docket.proposer_validator_id,
                "docket-0-retry",
                DocketRejectionReason::ChainViolation,
                "previous hash does not match",
            )
            .await;

        let flagged = detector.get_flagged_validators(REGISTER).await.unwrap();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].validator_id, docket.proposer_validator_id);
        assert_eq!(flagged[0].reason, FlagReason::RepeatedHighSeverity { count: 2 });
    }

    #[tokio::test]
    async fn test_invalid_votes_are_recorded_per_validator() {
        let time = clock();
        let consensus = ConsensusValidator::new(ConsensusValidationConfig::default(), time.clone());
        let detector = detector(time);

        let votes = vec![
            vote("validator-1", "h", VoteDecision::Approve),
            vote("validator-2", "other", VoteDecision::Approve),
            vote("validator-3", "h", VoteDecision::Unrecognized("Maybe".into())),
        ];

        for v in &votes {
            let result = consensus.validate_vote_structure(v, "h");
            if let Some(error) = result.errors.first() {
                detector
                    .log_invalid_vote(REGISTER, &v.validator_id, &v.docket_hash, &error.message)
                    .await;
            }
        }

        let stats = detector.get_stats().await;
        assert_eq!(stats.total_incidents, 2);
        assert_eq!(stats.distinct_validators, 2);
        assert_eq!(
            stats.incidents_by_type.get(&IncidentType::InvalidVoteSubmitted),
            Some(&2)
        );
        assert!(detector
            .get_incidents(REGISTER, "validator-1", None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_retention_forgets_old_misbehaviour() {
        let time = clock();
        let detector = detector(time.clone());
        detector
            .log_leader_impersonation(REGISTER, "validator-9", "validator-0", 1)
            .await;

        time.advance(8 * DAY_MS);
        assert_eq!(detector.cleanup_expired_incidents().await, 1);
        assert!(!detector
            .should_flag_for_review(REGISTER, "validator-9")
            .await
            .unwrap());
    }
}
