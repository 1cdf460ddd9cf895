//! Single LED running to the end of the strip and back

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{BLACK, Rgb};

const FRAME_HOLD: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct RunnerEffect {
    color: Rgb,
    /// Frame in the cycle, 0..2 * len
    frame: usize,
}

impl RunnerEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, frame: 0 }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for RunnerEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let len = leds.len();
        if len == 0 {
            return FrameStep::hold(FRAME_HOLD).end_of_cycle();
        }
        if self.frame >= 2 * len {
            self.frame = 0;
        }

        let position = if self.frame < len {
            self.frame
        } else {
            2 * len - 1 - self.frame
        };
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i == position { self.color } else { BLACK };
        }

        self.frame += 1;
        let step = FrameStep::hold(FRAME_HOLD);
        if self.frame >= 2 * len {
            self.frame = 0;
            return step.end_of_cycle();
        }
        step
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}
