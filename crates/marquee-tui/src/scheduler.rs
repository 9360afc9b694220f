//! Tokio timer backed [`Scheduler`]
//!
//! Each scheduled task is a spawned sleep that sends a [`FiredTask`] into a channel
//! drained by the UI loop. Cancelling aborts the sleep; a task that was already sent
//! before the abort is rejected by the view's token check.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use marquee_core::{CancelToken, FiredTask, FrameTask, Scheduler};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Tokens are unique across schedulers so views sharing a channel never collide
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<FiredTask>,
    tasks: HashMap<CancelToken, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Create a scheduler delivering into `tx`
    ///
    /// Must be used from within a tokio runtime.
    pub fn new(tx: mpsc::UnboundedSender<FiredTask>) -> Self {
        Self {
            tx,
            tasks: HashMap::new(),
        }
    }

    /// Create a scheduler together with its receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<FiredTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Number of timers that have not fired or been cancelled yet
    pub fn outstanding(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, task: FrameTask) -> CancelToken {
        self.tasks.retain(|_, handle| !handle.is_finished());

        let token = CancelToken::new(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed));
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(FiredTask { token, task }).is_err() {
                trace!(token = token.id(), "Scheduler receiver dropped");
            }
        });
        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
