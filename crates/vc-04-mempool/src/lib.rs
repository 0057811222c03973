//! # vc-04-mempool
//!
//! Per-register holding area for transactions awaiting docket inclusion.
//!
//! ## Guarantees
//!
//! | Guarantee | Enforcement |
//! |-----------|-------------|
//! | A transaction id is admitted at most once per register | `TransactionStore::insert_if_absent` (atomic entry) |
//! | A racing remove and expiry sweep remove an entry exactly once | `TransactionStore::remove_if` |
//! | No global lock | `DashMap` per-shard locking, per-key atomicity |
//! | No capacity ceiling | `max_size` overruns are logged, never refused |
//!
//! ## Expiry
//!
//! ```text
//! deadline = expires_at                          if set
//!          = added_to_pool_at + default_ttl      if a default TTL is configured
//!          = never                               otherwise (genesis transactions)
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/memory_store.rs - DashMap TransactionStore            │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - MempoolApi trait                           │
//! │  ports/outbound.rs - TransactionStore trait                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/ - config, errors, expiry policy, ordering, stats       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vc_04_mempool::{spawn_cleanup_task, MempoolApi, MempoolConfig, MempoolManager};
//!
//! let pool = Arc::new(MempoolManager::in_memory(MempoolConfig::from_env(), time_source)?);
//! let sweeper = spawn_cleanup_task(Arc::clone(&pool), shutdown_rx);
//! pool.add_transaction("reg-1", tx).await?;
//! let batch = pool.get_pending_transactions("reg-1", 100).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod tasks;

pub use adapters::InMemoryTransactionStore;
pub use domain::{MempoolConfig, MempoolError, MempoolStats};
pub use ports::{MempoolApi, TransactionStore};
pub use service::MempoolManager;
pub use tasks::spawn_cleanup_task;
