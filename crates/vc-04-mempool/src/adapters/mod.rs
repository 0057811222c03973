//! Adapters layer - store implementations.

pub mod memory_store;

pub use memory_store::InMemoryTransactionStore;
