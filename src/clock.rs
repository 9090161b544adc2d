//! Frame-rate limiting for the game loop.

use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};

/// Paces the game loop at a fixed number of ticks per second
#[allow(async_fn_in_trait)]
pub trait Clock {
    /// Wait until the next tick is due
    async fn tick(&mut self);
}

pub struct TokioClock {
    interval: Interval,
}

impl TokioClock {
    /// Must be created inside a tokio runtime
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(ticks_per_second.max(1)));
        let mut interval = interval(period);
        // a slow frame pushes the schedule back instead of bursting to catch up
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Clock for TokioClock {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
