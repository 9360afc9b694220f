//! Deterministic scheduler driven by a virtual clock
//!
//! Hosts without a timer runtime (and tests) advance time explicitly and feed the
//! returned tasks back into the view.

use std::time::Duration;

use super::scheduler::{CancelToken, FiredTask, FrameTask, Scheduler};

#[derive(Debug, Clone)]
struct Pending {
    token: CancelToken,
    due: Duration,
    task: FrameTask,
}

/// Virtual-clock [`Scheduler`]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward and return every task that came due, oldest first
    pub fn advance(&mut self, by: Duration) -> Vec<FiredTask> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.due, p.token));

        due.into_iter()
            .map(|p| FiredTask {
                token: p.token,
                task: p.task,
            })
            .collect()
    }

    /// Jump to the earliest pending deadline and fire what is due there
    pub fn advance_to_next(&mut self) -> Vec<FiredTask> {
        match self.next_due() {
            Some(due) => {
                let by = due.saturating_sub(self.now);
                self.advance(by)
            }
            None => Vec::new(),
        }
    }

    /// Earliest pending deadline
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of pending tasks of one kind
    pub fn pending_of(&self, task: FrameTask) -> usize {
        self.pending.iter().filter(|p| p.task == task).count()
    }

    /// Total tasks ever scheduled
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    /// Total pending tasks removed by `cancel`
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: FrameTask) -> CancelToken {
        self.next_id += 1;
        let token = CancelToken::new(self.next_id);
        self.pending.push(Pending {
            token,
            due: self.now + delay,
            task,
        });
        self.scheduled += 1;
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        let before = self.pending.len();
        self.pending.retain(|p| p.token != token);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(Duration::from_millis(30), FrameTask::PauseExpired);
        let early = scheduler.schedule(Duration::from_millis(10), FrameTask::Frame);

        assert!(scheduler.advance(Duration::from_millis(5)).is_empty());
        let fired = scheduler.advance(Duration::from_millis(30));
        assert_eq!(
            fired.iter().map(|f| f.token).collect::<Vec<_>>(),
            vec![early, late]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel_counts_only_pending() {
        let mut scheduler = ManualScheduler::new();
        let token = scheduler.schedule(Duration::from_millis(10), FrameTask::Frame);
        scheduler.cancel(token);
        scheduler.cancel(token);
        assert_eq!(scheduler.cancelled_count(), 1);
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_advance_to_next() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(20), FrameTask::Frame);
        let fired = scheduler.advance_to_next();
        assert_eq!(fired.len(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(20));
        assert!(scheduler.advance_to_next().is_empty());
    }
}
