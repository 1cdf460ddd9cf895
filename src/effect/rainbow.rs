//! Rainbow cycling effect
//!
//! Spreads one turn of the color wheel over the strip and rotates it.

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{Rgb, wheel};

/// Frames in one full rotation
const CYCLE_FRAMES: u8 = 255;
const FRAME_HOLD: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Wheel rotation, 0..CYCLE_FRAMES
    rotation: u8,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { rotation: 0 }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let len = leds.len().max(1);
        for (i, led) in leds.iter_mut().enumerate() {
            let pos = (i * 256 / len) + usize::from(self.rotation);
            *led = wheel((pos & 0xFF) as u8);
        }

        self.rotation += 1;
        let step = FrameStep::hold(FRAME_HOLD);
        if self.rotation >= CYCLE_FRAMES {
            self.rotation = 0;
            return step.end_of_cycle();
        }
        step
    }

    fn reset(&mut self) {
        self.rotation = 0;
    }
}
