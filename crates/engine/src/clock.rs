//! Tick schedulers.

use std::thread;
use std::time::{Duration, Instant};

use crate::ports::Scheduler;
use crate::types::TICK_MS;

/// Wall-clock scheduler with a fixed interval.
///
/// Deadlines advance by exactly one interval per tick so sleep jitter does
/// not accumulate. After a stall longer than one interval the schedule
/// restarts from now instead of bursting to catch up.
#[derive(Debug)]
pub struct FixedTicker {
    interval: Duration,
    next_deadline: Option<Instant>,
    ticks: u64,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
            ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

impl Scheduler for FixedTicker {
    fn wait_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.interval);

        if let Some(remaining) = deadline.checked_duration_since(now) {
            thread::sleep(remaining);
            self.next_deadline = Some(deadline + self.interval);
        } else {
            self.next_deadline = Some(now + self.interval);
        }
        self.ticks += 1;
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Scheduler that never sleeps; each wait just counts a tick.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    ticks: u64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ManualTicker {
    fn wait_next_tick(&mut self) {
        self.ticks += 1;
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }
}
