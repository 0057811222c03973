//! # Outbound Port - TransactionStore
//!
//! Backing store keyed by register, then by transaction id.
//!
//! Implementations must make `insert_if_absent`, `remove` and `remove_if`
//! atomic per key, and must not serialise operations on different keys.

use shared_types::{RegisterId, Transaction};

pub trait TransactionStore: Send + Sync {
    /// Inserts `tx` unless its id is already resident. Returns true on insert.
    fn insert_if_absent(&self, register_id: &str, tx: Transaction) -> bool;

    fn remove(&self, register_id: &str, tx_id: &str) -> Option<Transaction>;

    /// Removes the entry only if `predicate` holds for the version stored
    /// at the moment of removal.
    fn remove_if(
        &self,
        register_id: &str,
        tx_id: &str,
        predicate: &dyn Fn(&Transaction) -> bool,
    ) -> Option<Transaction>;

    fn get(&self, register_id: &str, tx_id: &str) -> Option<Transaction>;

    fn contains(&self, register_id: &str, tx_id: &str) -> bool;

    fn count(&self, register_id: &str) -> usize;

    /// Point-in-time copy of one register's pool, in no particular order.
    fn snapshot(&self, register_id: &str) -> Vec<Transaction>;

    fn registers(&self) -> Vec<RegisterId>;

    /// Removes every entry of `register_id`; returns how many were removed.
    fn clear(&self, register_id: &str) -> usize;
}
