//! # Concurrency
//!
//! Many tasks hammering one pool and one incident store.

#[cfg(test)]
mod tests {
    use crate::fixtures::{clock, transaction, REGISTER};
    use shared_types::{CancellationSignal, TransactionPriority};
    use std::sync::Arc;
    use tokio::sync::watch;
    use vc_04_mempool::{spawn_cleanup_task, MempoolApi, MempoolConfig, MempoolManager};
    use vc_05_bad_actor_detection::{BadActorApi, BadActorConfig, BadActorDetector};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_duplicate_submissions_admit_exactly_once() {
        let mempool = Arc::new(MempoolManager::in_memory(MempoolConfig::default(), clock()).unwrap());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let mempool = mempool.clone();
            handles.push(tokio::spawn(async move {
                mempool
                    .add_transaction(REGISTER, transaction("tx-contended", TransactionPriority::Normal))
                    .await
                    .unwrap()
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(mempool.get_transaction_count(REGISTER).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_registers_do_not_interfere() {
        let mempool = Arc::new(MempoolManager::in_memory(MempoolConfig::default(), clock()).unwrap());

        let mut handles = Vec::new();
        for r in 0..8 {
            let mempool = mempool.clone();
            handles.push(tokio::spawn(async move {
                let register = format!("register-{}", r);
                for i in 0..50 {
                    let mut tx = transaction(&format!("tx-{}", i), TransactionPriority::Normal);
                    tx.register_id = register.clone();
                    assert!(mempool.add_transaction(&register, tx).await.unwrap());
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut registers = mempool.registers().await;
        registers.sort();
        assert_eq!(registers.len(), 8);
        for register in registers {
            assert_eq!(mempool.get_transaction_count(&register).await.unwrap(), 50);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_incident_logging_loses_nothing() {
        let detector = Arc::new(BadActorDetector::in_memory(BadActorConfig::default(), clock()).unwrap());

        let mut handles = Vec::new();
        for t in 0..16u64 {
            let detector = detector.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..25u64 {
                    detector
                        .log_double_vote(REGISTER, "validator-7", "docket", t * 100 + i)
                        .await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let incidents = detector
            .get_incidents(REGISTER, "validator-7", None)
            .await
            .unwrap();
        assert_eq!(incidents.len(), 400);
    }

    #[tokio::test]
    async fn test_cleanup_task_stops_on_shutdown() {
        let mempool = Arc::new(
            MempoolManager::in_memory(MempoolConfig::for_testing(), clock()).unwrap(),
        );
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_cleanup_task(mempool.clone(), shutdown_rx);

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(std::time::Duration::from_secs(1), handle)
            .await
            .expect("cleanup task should stop")
            .unwrap();

        assert_eq!(
            mempool
                .cleanup_expired_transactions(CancellationSignal::never())
                .await,
            0
        );
    }
}
