//! # Inbound Port - MempoolApi
//!
//! Primary driving port exposing the transaction pool.
//!
//! Every operation is an independent unit of work; dropping the returned
//! future cancels it. Business outcomes (duplicate, not found, pool over
//! its soft size) are plain return values. Only blank identifiers fail.

use crate::domain::{MempoolResult, MempoolStats};
use async_trait::async_trait;
use shared_types::{CancellationSignal, RegisterId, Transaction};

#[async_trait]
pub trait MempoolApi: Send + Sync {
    /// Admits `tx` into the pool of `register_id`.
    ///
    /// Returns `Ok(false)` if a transaction with the same id is already
    /// resident. Stamps `added_to_pool_at`.
    async fn add_transaction(&self, register_id: &str, tx: Transaction) -> MempoolResult<bool>;

    /// Removes a transaction. Returns `Ok(false)` if it was not resident.
    async fn remove_transaction(&self, register_id: &str, tx_id: &str) -> MempoolResult<bool>;

    /// Up to `max_count` resident transactions, highest priority and
    /// oldest admission first.
    async fn get_pending_transactions(
        &self,
        register_id: &str,
        max_count: usize,
    ) -> MempoolResult<Vec<Transaction>>;

    async fn get_transaction_count(&self, register_id: &str) -> MempoolResult<usize>;

    async fn get_stats(&self, register_id: &str) -> MempoolResult<MempoolStats>;

    /// Sweeps every register and removes expired transactions.
    ///
    /// Stops early when `cancel` fires; entries already removed stay removed.
    async fn cleanup_expired_transactions(&self, cancel: CancellationSignal) -> usize;

    /// Re-admits transactions pulled for a docket that was not committed.
    async fn return_transactions(
        &self,
        register_id: &str,
        txs: Vec<Transaction>,
    ) -> MempoolResult<usize>;

    async fn get_transaction(
        &self,
        register_id: &str,
        tx_id: &str,
    ) -> MempoolResult<Option<Transaction>>;

    async fn contains_transaction(&self, register_id: &str, tx_id: &str) -> MempoolResult<bool>;

    /// Registers that currently hold a pool.
    async fn registers(&self) -> Vec<RegisterId>;

    /// Drops every transaction of `register_id`. Returns how many were removed.
    async fn clear_register(&self, register_id: &str) -> MempoolResult<usize>;
}
