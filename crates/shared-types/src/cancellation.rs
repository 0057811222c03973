//! Cooperative cancellation for long-running sweeps.
//!
//! Built on `tokio::sync::watch` so the same channel that shuts down a
//! background task can also cut a sweep short.

use tokio::sync::watch;

/// Sender half: flips the signal to cancelled.
#[derive(Debug)]
pub struct CancellationTrigger {
    tx: watch::Sender<bool>,
}

impl CancellationTrigger {
    pub fn cancel(&self) {
        // No receivers left is not an error for a cancel request.
        let _ = self.tx.send(true);
    }

    /// Creates another signal observing this trigger.
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiver half: checked between units of work.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    rx: watch::Receiver<bool>,
}

impl CancellationSignal {
    /// Creates a linked trigger/signal pair.
    pub fn pair() -> (CancellationTrigger, CancellationSignal) {
        let (tx, rx) = watch::channel(false);
        (CancellationTrigger { tx }, CancellationSignal { rx })
    }

    /// A signal that is never cancelled.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled. Never resolves if the trigger is dropped
    /// without cancelling.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl From<watch::Receiver<bool>> for CancellationSignal {
    fn from(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }
}
