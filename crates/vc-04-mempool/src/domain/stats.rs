//! Pool statistics.

use serde::Serialize;
use shared_types::{RegisterId, Timestamp, Transaction, TransactionPriority};

/// Snapshot of one register's pool.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MempoolStats {
    pub register_id: RegisterId,
    pub total_count: usize,
    pub max_size: usize,
    /// `total_count / max_size * 100`; may exceed 100.
    pub fill_percentage: f64,
    pub high_priority_count: usize,
    pub normal_priority_count: usize,
    pub low_priority_count: usize,
    pub oldest_added_at: Option<Timestamp>,
}

impl MempoolStats {
    pub fn from_transactions<'a>(
        register_id: &str,
        transactions: impl IntoIterator<Item = &'a Transaction>,
        max_size: usize,
    ) -> Self {
        let mut stats = Self {
            register_id: register_id.to_string(),
            total_count: 0,
            max_size,
            fill_percentage: 0.0,
            high_priority_count: 0,
            normal_priority_count: 0,
            low_priority_count: 0,
            oldest_added_at: None,
        };

        for tx in transactions {
            stats.total_count += 1;
            match tx.priority {
                TransactionPriority::High => stats.high_priority_count += 1,
                TransactionPriority::Normal => stats.normal_priority_count += 1,
                TransactionPriority::Low => stats.low_priority_count += 1,
            }
            if let Some(added_at) = tx.added_to_pool_at {
                stats.oldest_added_at = Some(match stats.oldest_added_at {
                    Some(oldest) => oldest.min(added_at),
                    None => added_at,
                });
            }
        }

        if max_size > 0 {
            stats.fill_percentage = stats.total_count as f64 / max_size as f64 * 100.0;
        }
        stats
    }
}
