//! Frame pacing
//!
//! Splits every frame hold into short slices so the buttons can be
//! polled while a frame is on the strip. The caller sleeps for each slice
//! and polls in between.

use embassy_time::{Duration, Instant};

/// Deadline tracker for interruptible frame holds
///
/// Consecutive holds are chained on the previous deadline so render and
/// transfer time do not stretch the animation. If we fall too far behind,
/// the backlog is skipped instead of caught up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    deadline: Option<Instant>,
    poll_interval: Duration,
}

impl FramePacer {
    /// Create a pacer that never sleeps longer than `poll_interval`
    pub const fn new(poll_interval: Duration) -> Self {
        Self {
            deadline: None,
            poll_interval,
        }
    }

    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Start holding for `hold`, returning the new deadline
    pub fn start(&mut self, now: Instant, hold: Duration) -> Instant {
        let base = match self.deadline {
            Some(previous) if previous <= now && now <= previous + hold * 2 => previous,
            _ => now,
        };
        let deadline = base + hold;
        self.deadline = Some(deadline);
        deadline
    }

    /// Forget the chained deadline
    ///
    /// The next hold starts from the time it is requested.
    pub fn reset(&mut self) {
        self.deadline = None;
    }

    /// Length of the next sleep slice, `None` once the deadline has passed
    pub fn next_slice(&self, now: Instant) -> Option<Duration> {
        let deadline = self.deadline?;
        if now >= deadline {
            return None;
        }
        let remaining = deadline - now;
        Some(remaining.min(self.poll_interval.max(Duration::from_ticks(1))))
    }
}
