//! Breathing effect: sine-wave fade of the selected color

use core::f32::consts::TAU;

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::{
    color::{Rgb, fill, scale_color},
    math8::unit8,
};

/// Phase advance per frame, in radians
const PHASE_STEP: f32 = 0.04;
const FRAME_HOLD: Duration = Duration::from_millis(20);

#[derive(Debug, Clone)]
pub struct BreathingEffect {
    color: Rgb,
    phase: f32,
}

impl BreathingEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, phase: 0.0 }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for BreathingEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let level = (libm::sinf(self.phase) + 1.0) / 2.0;
        fill(leds, scale_color(self.color, unit8(level)));

        self.phase += PHASE_STEP;
        if self.phase > TAU {
            self.phase -= TAU;
        }
        FrameStep::hold(FRAME_HOLD)
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
