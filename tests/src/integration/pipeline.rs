//! # End-to-End Pipeline
//!
//! ```text
//! submit ──► TransactionValidator ──► Mempool ──► docket assembly
//!                  │ invalid                          │
//!                  ▼                                  ▼
//!            BadActorDetector ◄── reject ◄── ConsensusValidator
//! ```
//!
//! Docket assembly and the network are simulated inline; every subsystem
//! is the real implementation.

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        clock, docket_validator, init_test_logging, seven_two_one, transaction, transaction_validator, vote, NOW,
        REGISTER,
    };
    use shared_types::{
        CancellationSignal, DocketData, ManualTimeSource, TimeSource, TransactionPriority,
        VoteDecision, HOUR_MS,
    };
    use std::sync::Arc;
    use vc_02_docket_validation::DocketValidator;
    use vc_03_consensus_validation::{ConsensusValidationConfig, ConsensusValidator};
    use vc_04_mempool::{MempoolApi, MempoolConfig, MempoolManager};
    use vc_05_bad_actor_detection::{
        BadActorApi, BadActorConfig, BadActorDetector, DocketRejectionReason,
    };

    struct Node {
        clock: Arc<ManualTimeSource>,
        dockets: DocketValidator,
        transactions: vc_02_docket_validation::TransactionValidator,
        consensus: ConsensusValidator,
        mempool: MempoolManager,
        bad_actors: BadActorDetector,
    }

    impl Node {
        fn new() -> Self {
            init_test_logging();
            let clock = clock();
            Self {
                dockets: docket_validator(clock.clone()),
                transactions: transaction_validator(clock.clone()),
                consensus: ConsensusValidator::new(
                    ConsensusValidationConfig::default(),
                    clock.clone(),
                ),
                mempool: MempoolManager::in_memory(MempoolConfig::default(), clock.clone())
                    .expect("default mempool config is valid"),
                bad_actors: BadActorDetector::in_memory(BadActorConfig::default(), clock.clone())
                    .expect("default bad actor config is valid"),
                clock,
            }
        }

        /// Validates then pools; invalid submissions are charged to the sender.
        async fn submit(&self, sender: &str, tx: shared_types::Transaction) -> bool {
            let mut result = self.transactions.validate_transaction_structure(&tx);
            result.merge(self.transactions.validate_payload_hash(&tx));
            if let Some(error) = result.errors.first() {
                self.bad_actors
                    .log_transaction_validation_failure(
                        REGISTER,
                        sender,
                        &tx.transaction_id,
                        &error.code.to_string(),
                    )
                    .await;
                return false;
            }
            self.mempool.add_transaction(REGISTER, tx).await.unwrap()
        }

        async fn assemble(&self, number: u64, previous_hash: Option<&str>) -> DocketData {
            let batch = self
                .mempool
                .get_pending_transactions(REGISTER, 100)
                .await
                .unwrap();
            let created_at = self.clock.now();
            let merkle_root = batch
                .iter()
                .map(|tx| tx.payload_hash.as_str())
                .collect::<Vec<_>>()
                .join(":");
            let docket_hash = self
                .dockets
                .compute_docket_hash(REGISTER, number, previous_hash, &merkle_root, created_at)
                .unwrap();
            DocketData {
                docket_id: format!("docket-{}", number),
                register_id: REGISTER.to_string(),
                docket_number: number,
                previous_hash: previous_hash.map(str::to_string),
                docket_hash,
                created_at,
                merkle_root,
                proposer_validator_id: "validator-0".to_string(),
                transaction_count: batch.len() as u64,
            }
        }
    }

    #[tokio::test]
    async fn test_submit_pool_seal_vote_commit() {
        let node = Node::new();

        assert!(node.submit("client-1", transaction("tx-low", TransactionPriority::Low)).await);
        assert!(node.submit("client-1", transaction("tx-high", TransactionPriority::High)).await);
        // Resubmission is idempotent.
        assert!(!node.submit("client-1", transaction("tx-high", TransactionPriority::High)).await);

        let mut forged = transaction("tx-forged", TransactionPriority::High);
        forged.payload = b"something else".to_vec();
        assert!(!node.submit("client-2", forged).await);

        let pending = node.mempool.get_pending_transactions(REGISTER, 10).await.unwrap();
        let ids: Vec<_> = pending.iter().map(|tx| tx.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["tx-high", "tx-low"]);

        node.clock.advance(1_000);
        let genesis = node.assemble(0, None).await;
        assert!(node.dockets.validate_genesis_docket(&genesis).is_valid());
        assert!(node
            .dockets
            .validate_docket_hash(&genesis, &genesis.docket_hash)
            .is_valid());

        let votes = seven_two_one(&genesis.docket_hash);
        assert!(node
            .consensus
            .validate_vote_collection(&votes, &genesis.docket_hash)
            .is_valid());
        assert!(node
            .consensus
            .check_consensus_achievement(&votes, 10, 0.66)
            .is_valid());

        // Committed: the docket's transactions leave the pool.
        for tx in &pending {
            assert!(node
                .mempool
                .remove_transaction(REGISTER, &tx.transaction_id)
                .await
                .unwrap());
        }
        assert_eq!(node.mempool.get_transaction_count(REGISTER).await.unwrap(), 0);

        let stats = node.bad_actors.get_stats().await;
        assert_eq!(stats.total_incidents, 1);
        assert_eq!(
            node.bad_actors
                .get_incidents(REGISTER, "client-2", None)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_failed_round_returns_transactions_to_pool() {
        let node = Node::new();
        node.submit("client-1", transaction("tx-1", TransactionPriority::Normal)).await;
        node.submit("client-1", transaction("tx-2", TransactionPriority::Normal)).await;

        let batch = node.mempool.get_pending_transactions(REGISTER, 10).await.unwrap();
        for tx in &batch {
            node.mempool
                .remove_transaction(REGISTER, &tx.transaction_id)
                .await
                .unwrap();
        }

        let docket = node.assemble(0, None).await;
        let votes: Vec<_> = (0..10)
            .map(|i| {
                let decision = if i < 3 {
                    VoteDecision::Approve
                } else {
                    VoteDecision::Reject
                };
                vote(&format!("validator-{}", i), &docket.docket_hash, decision)
            })
            .collect();
        let round = node.consensus.check_consensus_achievement(&votes, 10, 0.66);
        assert!(!round.is_valid());

        node.bad_actors
            .log_docket_rejection(
                REGISTER,
                &docket.proposer_validator_id,
                &docket.docket_id,
                DocketRejectionReason::ConsensusNotReached,
                "3 of 10 approved",
            )
            .await;

        node.clock.advance(500);
        let returned = node
            .mempool
            .return_transactions(REGISTER, batch)
            .await
            .unwrap();
        assert_eq!(returned, 2);

        let restored = node.mempool.get_transaction(REGISTER, "tx-1").await.unwrap();
        assert_eq!(
            restored.and_then(|tx| tx.added_to_pool_at),
            Some(NOW + 500)
        );
        assert!(!node
            .bad_actors
            .should_flag_for_review(REGISTER, "validator-0")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_expired_transactions_never_reach_a_docket() {
        let node = Node::new();
        let mut short_lived = transaction("tx-short", TransactionPriority::High);
        short_lived.expires_at = Some(NOW + HOUR_MS);
        node.submit("client-1", short_lived).await;
        node.submit("client-1", transaction("tx-forever", TransactionPriority::Low)).await;

        node.clock.advance(HOUR_MS);
        let removed = node
            .mempool
            .cleanup_expired_transactions(CancellationSignal::never())
            .await;
        assert_eq!(removed, 1);

        let docket = node.assemble(0, None).await;
        assert_eq!(docket.transaction_count, 1);
    }
}
