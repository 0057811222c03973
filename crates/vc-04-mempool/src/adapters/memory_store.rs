//! In-memory `TransactionStore` over nested `DashMap`s.
//!
//! The outer map is only touched to find, create or prune a register's
//! pool; every per-transaction operation runs on the inner map, so two
//! registers never contend and two ids in one register only contend when
//! they share a shard. A pool is pruned once it drains empty.

use crate::ports::TransactionStore;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shared_types::{RegisterId, Transaction, TransactionId};
use std::sync::Arc;

type RegisterPool = DashMap<TransactionId, Transaction>;

#[derive(Default)]
pub struct InMemoryTransactionStore {
    pools: DashMap<RegisterId, Arc<RegisterPool>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn pool(&self, register_id: &str) -> Option<Arc<RegisterPool>> {
        self.pools.get(register_id).map(|pool| Arc::clone(pool.value()))
    }

    /// Drops the register's pool if it holds nothing.
    fn prune_if_empty(&self, register_id: &str) {
        self.pools.remove_if(register_id, |_, pool| pool.is_empty());
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn insert_if_absent(&self, register_id: &str, tx: Transaction) -> bool {
        loop {
            // The outer read guard is held across the insert so a concurrent
            // prune cannot detach the pool underneath it.
            if let Some(pool) = self.pools.get(register_id) {
                let inserted = match pool.entry(tx.transaction_id.clone()) {
                    Entry::Occupied(_) => false,
                    Entry::Vacant(slot) => {
                        slot.insert(tx);
                        true
                    }
                };
                return inserted;
            }
            self.pools.entry(register_id.to_string()).or_default();
        }
    }

    fn remove(&self, register_id: &str, tx_id: &str) -> Option<Transaction> {
        let removed = self.pool(register_id)?.remove(tx_id).map(|(_, tx)| tx);
        if removed.is_some() {
            self.prune_if_empty(register_id);
        }
        removed
    }

    fn remove_if(
        &self,
        register_id: &str,
        tx_id: &str,
        predicate: &dyn Fn(&Transaction) -> bool,
    ) -> Option<Transaction> {
        let removed = self
            .pool(register_id)?
            .remove_if(tx_id, |_, tx| predicate(tx))
            .map(|(_, tx)| tx);
        if removed.is_some() {
            self.prune_if_empty(register_id);
        }
        removed
    }

    fn get(&self, register_id: &str, tx_id: &str) -> Option<Transaction> {
        let pool = self.pool(register_id)?;
        let tx = pool.get(tx_id).map(|entry| entry.value().clone());
        tx
    }

    fn contains(&self, register_id: &str, tx_id: &str) -> bool {
        self.pool(register_id)
            .is_some_and(|pool| pool.contains_key(tx_id))
    }

    fn count(&self, register_id: &str) -> usize {
        self.pool(register_id).map_or(0, |pool| pool.len())
    }

    fn snapshot(&self, register_id: &str) -> Vec<Transaction> {
        self.pool(register_id).map_or_else(Vec::new, |pool| {
            pool.iter().map(|entry| entry.value().clone()).collect()
        })
    }

    fn registers(&self) -> Vec<RegisterId> {
        self.pools.iter().map(|entry| entry.key().clone()).collect()
    }

    fn clear(&self, register_id: &str) -> usize {
        let Some(pool) = self.pool(register_id) else {
            return 0;
        };
        let mut removed = 0;
        pool.retain(|_, _| {
            removed += 1;
            false
        });
        drop(pool);
        self.prune_if_empty(register_id);
        removed
    }
}
