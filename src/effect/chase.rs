//! Theater chase: every third LED lit, stepping along the strip

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{BLACK, Rgb, fill};

const SPACING: usize = 3;
const ROUNDS: u8 = 10;
/// Each offset shows a lit frame followed by a dark frame
const CYCLE_FRAMES: u8 = ROUNDS * SPACING as u8 * 2;
const FRAME_HOLD: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct ChaseEffect {
    color: Rgb,
    frame: u8,
}

impl ChaseEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, frame: 0 }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for ChaseEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let is_lit = self.frame % 2 == 0;
        if is_lit {
            let offset = usize::from(self.frame / 2) % SPACING;
            for (i, led) in leds.iter_mut().enumerate() {
                *led = if i % SPACING == offset {
                    self.color
                } else {
                    BLACK
                };
            }
        } else {
            fill(leds, BLACK);
        }

        self.frame += 1;
        let step = FrameStep::hold(FRAME_HOLD);
        if self.frame >= CYCLE_FRAMES {
            self.frame = 0;
            return step.end_of_cycle();
        }
        step
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}
