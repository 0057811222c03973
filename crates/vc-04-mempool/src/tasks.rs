//! Background expiry sweep.

use crate::ports::MempoolApi;
use crate::service::MempoolManager;
use shared_types::CancellationSignal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Runs `cleanup_expired_transactions` every `cleanup_interval_ms` of the
/// manager's config until `shutdown` flips to `true` (or its sender is
/// dropped).
///
/// The shutdown channel doubles as the sweep's cancellation signal, so a
/// sweep in progress stops between entries.
pub fn spawn_cleanup_task(
    manager: Arc<MempoolManager>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let interval = Duration::from_millis(manager.config().cleanup_interval_ms);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        info!(interval_ms = interval.as_millis() as u64, "Mempool cleanup task started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if *shutdown.borrow() {
                        break;
                    }
                    let cancel = CancellationSignal::from(shutdown.clone());
                    let removed = manager.cleanup_expired_transactions(cancel).await;
                    debug!(removed, "Scheduled expiry sweep finished");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        info!("Mempool cleanup task stopped");
    })
}
