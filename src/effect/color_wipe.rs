//! Color wipe: light the strip LED by LED, then clear it the same way

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{BLACK, Rgb};

const STEP_HOLD: Duration = Duration::from_millis(50);
/// Extra pause once the whole strip is lit
const FULL_HOLD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WipePhase {
    /// LEDs `0..=n` are lit
    Filling(usize),
    /// LEDs `0..=n` are cleared, the rest still lit
    Clearing(usize),
}

#[derive(Debug, Clone)]
pub struct ColorWipeEffect {
    color: Rgb,
    phase: WipePhase,
}

impl ColorWipeEffect {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            phase: WipePhase::Filling(0),
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for ColorWipeEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let len = leds.len();
        if len == 0 {
            return FrameStep::hold(STEP_HOLD).end_of_cycle();
        }

        match self.phase {
            WipePhase::Filling(edge) => {
                for (i, led) in leds.iter_mut().enumerate() {
                    *led = if i <= edge { self.color } else { BLACK };
                }
                if edge + 1 >= len {
                    self.phase = WipePhase::Clearing(0);
                    FrameStep::hold(STEP_HOLD + FULL_HOLD)
                } else {
                    self.phase = WipePhase::Filling(edge + 1);
                    FrameStep::hold(STEP_HOLD)
                }
            }
            WipePhase::Clearing(edge) => {
                for (i, led) in leds.iter_mut().enumerate() {
                    *led = if i <= edge { BLACK } else { self.color };
                }
                if edge + 1 >= len {
                    self.phase = WipePhase::Filling(0);
                    FrameStep::hold(STEP_HOLD).end_of_cycle()
                } else {
                    self.phase = WipePhase::Clearing(edge + 1);
                    FrameStep::hold(STEP_HOLD)
                }
            }
        }
    }

    fn reset(&mut self) {
        self.phase = WipePhase::Filling(0);
    }
}
