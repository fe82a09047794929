//! Cancellable recurring task driven by the host's event loop

use std::time::{Duration, Instant};

/// Fires at most once per poll, on a fixed interval.
///
/// Late polls do not build a backlog: the next deadline is measured from the
/// poll that fired, so missed ticks are simply dropped.
#[derive(Debug, Clone)]
pub struct RecurringTask {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RecurringTask {
    /// A stopped task
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the task; the first tick is one interval after `now`
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true if a tick is due, and re-arms
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time until the next tick, `None` while stopped
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
