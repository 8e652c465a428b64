//! Cancellable quiet-window timer.
//!
//! Coalesces a rapid event stream into a single action per quiet
//! interval. Each `schedule` call aborts the previously armed timer task
//! before arming a new one, so only the most recent scheduled action can
//! fire. The debouncer holds no result state; it purely delays and
//! cancels.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A restartable delay timer wrapping a downstream action.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with a fixed quiet window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Arm the timer with `action`, cancelling any pending earlier action.
    ///
    /// `action` runs after the quiet window elapses without another
    /// `schedule` or `cancel` call. An aborted action never executes.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        if let Some(earlier) = self.swap_pending(Some(handle)) {
            earlier.abort();
        }
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&self) {
        if let Some(pending) = self.swap_pending(None) {
            pending.abort();
        }
    }

    fn swap_pending(&self, next: Option<JoinHandle<()>>) -> Option<JoinHandle<()>> {
        let mut guard = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, next)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
