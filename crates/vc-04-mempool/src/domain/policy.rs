//! Expiry and ordering rules.

use shared_types::{Timestamp, Transaction};
use std::cmp::Ordering;

/// Instant after which `tx` may be swept, or `None` if it never expires.
///
/// A zero default TTL is treated as unset.
pub fn expiry_deadline(tx: &Transaction, default_ttl_ms: Option<u64>) -> Option<Timestamp> {
    match (tx.expires_at, default_ttl_ms, tx.added_to_pool_at) {
        (Some(expires_at), _, _) => Some(expires_at),
        (None, Some(ttl), Some(added_at)) if ttl > 0 => Some(added_at.saturating_add(ttl)),
        _ => None,
    }
}

/// Returns true if `tx` has reached its deadline at `now`.
pub fn is_expired(tx: &Transaction, now: Timestamp, default_ttl_ms: Option<u64>) -> bool {
    expiry_deadline(tx, default_ttl_ms).is_some_and(|deadline| now >= deadline)
}

/// Pending order: higher priority first, then earliest admission, then id.
pub fn pending_order(a: &Transaction, b: &Transaction) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.added_to_pool_at.cmp(&b.added_to_pool_at))
        .then_with(|| a.transaction_id.cmp(&b.transaction_id))
}
