//! All LEDs off

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{BLACK, Rgb, fill};

/// Idle time between two button checks while off
const IDLE_HOLD: Duration = Duration::from_millis(100);

/// Blanks the strip once, then idles
#[derive(Debug, Clone, Default)]
pub struct OffEffect {
    blanked: bool,
}

impl OffEffect {
    pub const fn new() -> Self {
        Self { blanked: false }
    }
}

impl Effect for OffEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        fill(leds, BLACK);
        let step = FrameStep::hold(IDLE_HOLD).end_of_cycle();
        if self.blanked {
            return step.unchanged();
        }
        self.blanked = true;
        step
    }

    fn reset(&mut self) {
        self.blanked = false;
    }
}
