// listing/debounce.rs - Cancellable delayed delivery of a changing value
//
// Each `schedule` aborts the pending delivery and starts a new timer, so a
// value is only emitted once the input has been stable for the full delay.
// Dropping the debouncer aborts whatever is still pending.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its settled values arrive on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            tx,
            pending: None,
        };
        (debouncer, rx)
    }

    /// Restart the timer with `value` as the candidate to emit
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner was torn down
            let _ = tx.send(value);
        }));
    }

    /// Drop the pending delivery, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
