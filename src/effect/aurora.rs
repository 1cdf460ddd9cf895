//! Aurora effect
//!
//! Smoothly blends a fixed green/teal/blue/purple palette across the
//! strip and slowly scrolls it. Ignores the selected color.

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::color::{Rgb, blend_colors, rgb_from_u32};

#[allow(clippy::unreadable_literal)]
const PALETTE: [Rgb; 7] = [
    rgb_from_u32(0x00FF50), // Green
    rgb_from_u32(0x00FFB4), // Teal
    rgb_from_u32(0x00C8FF), // Cyan
    rgb_from_u32(0x0064FF), // Sky blue
    rgb_from_u32(0x5000FF), // Blue-purple
    rgb_from_u32(0x9600C8), // Purple
    rgb_from_u32(0x00B482), // Sea green
];

/// Palette positions per color (8-bit blend resolution)
const SEGMENT: u32 = 256;
/// Palette positions covered by the whole strip
const SPAN: u32 = PALETTE.len() as u32 * SEGMENT;
/// Scroll speed in palette positions per frame
const SCROLL_STEP: u32 = 3;

const FRAME_HOLD: Duration = Duration::from_millis(30);

/// Scrolling palette blend
#[derive(Debug, Clone, Default)]
pub struct AuroraEffect {
    offset: u32,
}

impl AuroraEffect {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Sample the palette at `pos` (0..SPAN), blending neighbours
    #[allow(clippy::cast_possible_truncation)]
    fn sample(pos: u32) -> Rgb {
        let segment = (pos / SEGMENT) as usize % PALETTE.len();
        let next = (segment + 1) % PALETTE.len();
        let frac = (pos % SEGMENT) as u8;
        blend_colors(PALETTE[segment], PALETTE[next], frac)
    }
}

impl Effect for AuroraEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let len = leds.len().max(1) as u64;
        for (i, led) in leds.iter_mut().enumerate() {
            let spread = (i as u64 * u64::from(SPAN) / len) as u32;
            *led = Self::sample((spread + self.offset) % SPAN);
        }

        self.offset = (self.offset + SCROLL_STEP) % SPAN;
        FrameStep::hold(FRAME_HOLD)
    }

    fn reset(&mut self) {
        self.offset = 0;
    }
}
