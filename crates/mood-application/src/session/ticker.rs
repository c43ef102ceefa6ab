//! Scheduling ticks for tracking sessions.
//!
//! A session samples once per tick and advances its elapsed time by whatever
//! the ticker reports, so tests can fast-forward a session with a logical
//! clock instead of waiting in real time.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Source of scheduling ticks.
#[async_trait]
pub trait Ticker: Send {
    /// Waits for the next tick and returns the time elapsed since the previous one.
    async fn tick(&mut self) -> Duration;
}

/// Ticks on a tokio interval and reports measured wall-clock deltas.
pub struct IntervalTicker {
    interval: Interval,
    last: Instant,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            last: Instant::now(),
        }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> Duration {
        let now = self.interval.tick().await;
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta
    }
}

/// Logical clock that advances by a fixed step per tick without sleeping.
///
/// Each tick still yields to the runtime so other tasks (and cancellation)
/// get a chance to run.
pub struct FixedStepTicker {
    step: Duration,
    ticks: u64,
}

impl FixedStepTicker {
    /// Creates a ticker advancing by `step`; a zero step is raised to 1ns.
    pub fn new(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_nanos(1)),
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[async_trait]
impl Ticker for FixedStepTicker {
    async fn tick(&mut self) -> Duration {
        tokio::task::yield_now().await;
        self.ticks += 1;
        self.step
    }
}
