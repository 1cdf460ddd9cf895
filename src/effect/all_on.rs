//! Solid fill with the selected color

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{Rgb, fill};

const FRAME_HOLD: Duration = Duration::from_millis(50);

/// Fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct AllOnEffect {
    color: Rgb,
}

impl AllOnEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for AllOnEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        fill(leds, self.color);
        FrameStep::hold(FRAME_HOLD).end_of_cycle()
    }
}
