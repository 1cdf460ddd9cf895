//! Time source used for debouncing and frame pacing.

use embassy_time::{Duration, Instant};

/// Blocking clock
///
/// Implement this trait to run the controller on a different time base
/// (for example a simulated clock in tests).
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Clock backed by the `embassy-time` driver of the target
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
