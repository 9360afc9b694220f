//! L3 Molecular Layer: When to repaint
//!
//! The host provides a [`Scheduler`] that delivers a [`FiredTask`] back to the view
//! after a delay. [`FrameScheduler`] keeps at most one frame tick and at most one
//! pause expiry outstanding and rejects deliveries for tokens it no longer tracks.

use std::time::Duration;

use tracing::{debug, trace};

/// Handle for a scheduled task, used to cancel it and to match its delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelToken(u64);

impl CancelToken {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Work the view performs when a scheduled task fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTask {
    /// Repaint to draw the next animation frame
    Frame,
    /// The pause between cycles is over
    PauseExpired,
}

/// A task delivered back by the host once its delay elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTask {
    pub token: CancelToken,
    pub task: FrameTask,
}

/// Host capability for delayed, cancelable callbacks
pub trait Scheduler {
    /// Deliver `task` after `delay`
    fn schedule(&mut self, delay: Duration, task: FrameTask) -> CancelToken;

    /// Prevent a pending task from being delivered. Unknown tokens are ignored.
    fn cancel(&mut self, token: CancelToken);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&mut self, delay: Duration, task: FrameTask) -> CancelToken {
        (**self).schedule(delay, task)
    }

    fn cancel(&mut self, token: CancelToken) {
        (**self).cancel(token)
    }
}

/// Tracks the outstanding frame tick and pause expiry of one view
#[derive(Debug)]
pub struct FrameScheduler<S> {
    scheduler: S,
    frame: Option<CancelToken>,
    pause: Option<CancelToken>,
}

impl<S: Scheduler> FrameScheduler<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            frame: None,
            pause: None,
        }
    }

    /// Schedule the next frame unless one is already pending
    ///
    /// Returns whether a new frame was scheduled.
    pub fn request_frame(&mut self, interval: Duration) -> bool {
        if self.frame.is_some() {
            return false;
        }
        self.frame = Some(self.scheduler.schedule(interval, FrameTask::Frame));
        true
    }

    /// Start (or restart) the pause timer, replacing any pending one
    pub fn arm_pause(&mut self, duration: Duration) {
        if let Some(previous) = self.pause.take() {
            self.scheduler.cancel(previous);
            debug!(token = previous.id(), "Re-arming pause timer");
        }
        let token = self.scheduler.schedule(duration, FrameTask::PauseExpired);
        debug!(
            token = token.id(),
            duration_ms = duration.as_millis(),
            "Pause timer armed"
        );
        self.pause = Some(token);
    }

    /// Cancel the pending pause timer, returning whether one was pending
    pub fn disarm_pause(&mut self) -> bool {
        match self.pause.take() {
            Some(token) => {
                self.scheduler.cancel(token);
                true
            }
            None => false,
        }
    }

    /// Cancel everything outstanding
    pub fn cancel_all(&mut self) {
        if let Some(token) = self.frame.take() {
            self.scheduler.cancel(token);
        }
        self.disarm_pause();
    }

    /// Accept a delivered task if it is the one currently tracked
    ///
    /// Clears the matching slot. Deliveries for cancelled or replaced tokens
    /// return false.
    pub fn accept(&mut self, fired: FiredTask) -> bool {
        let slot = match fired.task {
            FrameTask::Frame => &mut self.frame,
            FrameTask::PauseExpired => &mut self.pause,
        };
        if *slot == Some(fired.token) {
            *slot = None;
            true
        } else {
            trace!(token = fired.token.id(), task = ?fired.task, "Ignoring stale task");
            false
        }
    }

    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.frame.is_some()
    }

    #[inline]
    pub fn pause_pending(&self) -> bool {
        self.pause.is_some()
    }

    pub fn inner(&self) -> &S {
        &self.scheduler
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
