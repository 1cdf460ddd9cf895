//! Linear pulse: ramp the selected color up, then back down

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::{
    color::{Rgb, fill, scale_color},
    math8::ratio8,
};

/// Frames per ramp direction
const RAMP_STEPS: u8 = 50;
const FRAME_HOLD: Duration = Duration::from_millis(20);

#[derive(Debug, Clone)]
pub struct PulseEffect {
    color: Rgb,
    /// Position in the cycle, 0..2 * RAMP_STEPS
    step: u8,
}

impl PulseEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, step: 0 }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Ramp level for the current step: 0..RAMP_STEPS and back to 1
    const fn level(&self) -> u8 {
        if self.step < RAMP_STEPS {
            self.step
        } else {
            2 * RAMP_STEPS - self.step
        }
    }
}

impl Effect for PulseEffect {
    /// Pulses peak brighter than the other effects (128/255 ~ 0.5)
    const BRIGHTNESS: Option<u8> = Some(128);

    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let scale = ratio8(u32::from(self.level()), u32::from(RAMP_STEPS));
        fill(leds, scale_color(self.color, scale));

        self.step += 1;
        let step = FrameStep::hold(FRAME_HOLD);
        if self.step >= 2 * RAMP_STEPS {
            self.step = 0;
            return step.end_of_cycle();
        }
        step
    }

    fn reset(&mut self) {
        self.step = 0;
    }
}
