//! Deferred reset for the pull-to-refresh gesture.
//!
//! The original screen waits a fixed simulated-latency delay before
//! clearing the selection. That must not block the event loop, and a
//! reset scheduled by a session that has since been torn down must not
//! fire. The timer therefore runs the action in a spawned task and keeps
//! an abort handle: scheduling again cancels the pending action, and
//! dropping the timer cancels it too.

use std::future::Future;
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::debug;

/// A single-slot timer for the deferred reset.
///
/// At most one action is pending at a time. Requires a tokio runtime.
#[derive(Debug, Default)]
pub struct RefreshTimer {
    pending: Option<AbortHandle>,
}

impl RefreshTimer {
    /// Create a timer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay`, cancelling any pending
    /// action first.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        debug!(?delay, "scheduling deferred refresh");
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        self.pending = Some(task.abort_handle());
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an action is still waiting to fire.
    pub fn is_scheduled(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
