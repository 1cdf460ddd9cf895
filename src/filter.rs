//! Output brightness scaling
//!
//! Effects render at full scale; brightness is applied on the way to
//! the strip so the pixel buffer keeps the effect's own colors.

use crate::{color::Rgb, math8::scale8};

/// Global brightness with per-frame override
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    /// Scale factor (0-255 = 0.0-1.0)
    scale: u8,
}

impl BrightnessFilter {
    pub const fn new(scale: u8) -> Self {
        Self { scale }
    }

    pub const fn scale(&self) -> u8 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: u8) {
        self.scale = scale;
    }

    /// Scale a frame in place
    ///
    /// `scale_override` replaces the global scale for this frame.
    pub fn apply(&self, frame: &mut [Rgb], scale_override: Option<u8>) {
        let current = scale_override.unwrap_or(self.scale);

        if current == 255 {
            return;
        }

        if current == 0 {
            for pixel in frame.iter_mut() {
                *pixel = Rgb { r: 0, g: 0, b: 0 };
            }
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, current);
            pixel.g = scale8(pixel.g, current);
            pixel.b = scale8(pixel.b, current);
        }
    }
}
