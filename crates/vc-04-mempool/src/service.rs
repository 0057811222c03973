//! # Mempool Service
//!
//! `MempoolManager` implements [`MempoolApi`] over any [`TransactionStore`].

use crate::adapters::InMemoryTransactionStore;
use crate::domain::{is_expired, pending_order, MempoolConfig, MempoolResult, MempoolStats};
use crate::metrics;
use crate::ports::{MempoolApi, TransactionStore};
use async_trait::async_trait;
use shared_types::{
    ensure_not_blank, is_blank, CancellationSignal, RegisterId, TimeSource, Transaction,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Transaction pool manager.
pub struct MempoolManager {
    store: Arc<dyn TransactionStore>,
    config: MempoolConfig,
    time_source: Arc<dyn TimeSource>,
}

impl MempoolManager {
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(
        store: Arc<dyn TransactionStore>,
        config: MempoolConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> MempoolResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            time_source,
        })
    }

    /// Manager over a fresh in-memory store.
    pub fn in_memory(
        config: MempoolConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> MempoolResult<Self> {
        Self::new(
            Arc::new(InMemoryTransactionStore::new()),
            config,
            time_source,
        )
    }

    pub fn config(&self) -> &MempoolConfig {
        &self.config
    }

    fn admit(&self, register_id: &str, mut tx: Transaction) -> bool {
        tx.added_to_pool_at = Some(self.time_source.now());
        let tx_id = tx.transaction_id.clone();
        let priority = tx.priority;

        if !self.store.insert_if_absent(register_id, tx) {
            debug!(register_id, tx_id = %tx_id, "Duplicate transaction ignored");
            metrics::record_duplicate();
            return false;
        }

        metrics::record_admitted();
        let count = self.store.count(register_id);
        debug!(register_id, tx_id = %tx_id, ?priority, count, "Transaction admitted");
        if count > self.config.max_size {
            warn!(
                register_id,
                count,
                max_size = self.config.max_size,
                "Mempool exceeds configured size"
            );
        }
        true
    }

    fn sweep_register(
        &self,
        register_id: &str,
        now: u64,
        cancel: &CancellationSignal,
    ) -> (usize, bool) {
        let ttl = self.config.default_ttl_ms;
        let mut removed = 0;

        for tx in self.store.snapshot(register_id) {
            if cancel.is_cancelled() {
                return (removed, true);
            }
            if !is_expired(&tx, now, ttl) {
                continue;
            }
            // Re-checked against the stored version; a concurrent remove or
            // re-admission wins.
            let expired = self.store.remove_if(register_id, &tx.transaction_id, &|current| {
                is_expired(current, now, ttl)
            });
            if expired.is_some() {
                removed += 1;
            }
        }
        (removed, false)
    }
}

#[async_trait]
impl MempoolApi for MempoolManager {
    async fn add_transaction(&self, register_id: &str, tx: Transaction) -> MempoolResult<bool> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("transaction_id", &tx.transaction_id)?;
        if tx.register_id != register_id {
            warn!(
                register_id,
                tx_register_id = %tx.register_id,
                tx_id = %tx.transaction_id,
                "Transaction register differs from target pool"
            );
        }
        Ok(self.admit(register_id, tx))
    }

    async fn remove_transaction(&self, register_id: &str, tx_id: &str) -> MempoolResult<bool> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("transaction_id", tx_id)?;
        let removed = self.store.remove(register_id, tx_id).is_some();
        if removed {
            debug!(register_id, tx_id, "Transaction removed");
        }
        Ok(removed)
    }

    async fn get_pending_transactions(
        &self,
        register_id: &str,
        max_count: usize,
    ) -> MempoolResult<Vec<Transaction>> {
        ensure_not_blank("register_id", register_id)?;
        if max_count == 0 {
            return Ok(Vec::new());
        }
        let mut pending = self.store.snapshot(register_id);
        pending.sort_by(pending_order);
        pending.truncate(max_count);
        Ok(pending)
    }

    async fn get_transaction_count(&self, register_id: &str) -> MempoolResult<usize> {
        ensure_not_blank("register_id", register_id)?;
        Ok(self.store.count(register_id))
    }

    async fn get_stats(&self, register_id: &str) -> MempoolResult<MempoolStats> {
        ensure_not_blank("register_id", register_id)?;
        let snapshot = self.store.snapshot(register_id);
        Ok(MempoolStats::from_transactions(
            register_id,
            &snapshot,
            self.config.max_size,
        ))
    }

    async fn cleanup_expired_transactions(&self, cancel: CancellationSignal) -> usize {
        let now = self.time_source.now();
        let mut total = 0;

        for register_id in self.store.registers() {
            if cancel.is_cancelled() {
                info!(removed = total, "Expiry sweep cancelled");
                break;
            }
            let (removed, cancelled) = self.sweep_register(&register_id, now, &cancel);
            if removed > 0 {
                debug!(register_id = %register_id, removed, "Expired transactions removed");
            }
            total += removed;
            if cancelled {
                info!(removed = total, "Expiry sweep cancelled");
                break;
            }
        }

        if total > 0 {
            info!(removed = total, "Expiry sweep completed");
            metrics::record_expired(total);
        }
        total
    }

    async fn return_transactions(
        &self,
        register_id: &str,
        txs: Vec<Transaction>,
    ) -> MempoolResult<usize> {
        ensure_not_blank("register_id", register_id)?;
        if txs.is_empty() {
            return Ok(0);
        }

        let offered = txs.len();
        let mut readmitted = 0;
        for tx in txs {
            if is_blank(&tx.transaction_id) {
                warn!(register_id, "Skipping returned transaction without id");
                continue;
            }
            if self.admit(register_id, tx) {
                readmitted += 1;
            }
        }
        info!(register_id, offered, readmitted, "Transactions returned to pool");
        Ok(readmitted)
    }

    async fn get_transaction(
        &self,
        register_id: &str,
        tx_id: &str,
    ) -> MempoolResult<Option<Transaction>> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("transaction_id", tx_id)?;
        Ok(self.store.get(register_id, tx_id))
    }

    async fn contains_transaction(&self, register_id: &str, tx_id: &str) -> MempoolResult<bool> {
        ensure_not_blank("register_id", register_id)?;
        ensure_not_blank("transaction_id", tx_id)?;
        Ok(self.store.contains(register_id, tx_id))
    }

    async fn registers(&self) -> Vec<RegisterId> {
        self.store.registers()
    }

    async fn clear_register(&self, register_id: &str) -> MempoolResult<usize> {
        ensure_not_blank("register_id", register_id)?;
        let removed = self.store.clear(register_id);
        info!(register_id, removed, "Register pool cleared");
        Ok(removed)
    }
}
