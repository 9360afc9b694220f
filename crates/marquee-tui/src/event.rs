use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use marquee_core::FiredTask;
use tokio::sync::mpsc;

/// Merges terminal input with the marquee timers fired by [`crate::TokioScheduler`]
///
/// Timers are handed out before the terminal is polled, all of them at once, so a
/// frame tick never waits out a full poll interval and every view that became due
/// is repainted in the same draw.
pub struct EventHandler {
    tick_rate: Duration,
    timers: mpsc::UnboundedReceiver<FiredTask>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, timers: mpsc::UnboundedReceiver<FiredTask>) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            timers,
        }
    }

    /// Wait for the next event
    ///
    /// Blocks for at most the tick rate. `Tick` means nothing arrived in that time;
    /// timers firing during the wait are picked up by the following call.
    pub fn next(&mut self) -> Result<Option<AppEvent>> {
        let fired = self.drain_timers();
        if !fired.is_empty() {
            return Ok(Some(AppEvent::Timers(fired)));
        }

        if event::poll(self.tick_rate)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }

    fn drain_timers(&mut self) -> Vec<FiredTask> {
        let mut fired = Vec::new();
        while let Ok(task) = self.timers.try_recv() {
            fired.push(task);
        }
        fired
    }
}

/// Keep the terminal events the demo reacts to
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // crossterm reports releases and repeats on some platforms
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized; marquee viewports change with it
    Resize(u16, u16),
    /// Marquee frame or pause timers that fired since the last call
    Timers(Vec<FiredTask>),
    /// Poll interval elapsed without input
    Tick,
}
