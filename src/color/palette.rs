//! Selectable colors for the single-color effects

use super::{Rgb, rgb_from_u32};

/// A color entry with its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

impl NamedColor {
    const fn new(name: &'static str, color: u32) -> Self {
        Self {
            name,
            rgb: rgb_from_u32(color),
        }
    }
}

/// Number of selectable colors
pub const COLOR_COUNT: usize = 9;

/// Colors cycled by the color button, in order
#[allow(clippy::unreadable_literal)]
pub static COLOR_TABLE: [NamedColor; COLOR_COUNT] = [
    NamedColor::new("Red", 0xFF0000),
    NamedColor::new("Green", 0x00FF00),
    NamedColor::new("Blue", 0x0000FF),
    NamedColor::new("Yellow", 0xFFFF00),
    NamedColor::new("Magenta", 0xFF00FF),
    NamedColor::new("Cyan", 0x00FFFF),
    NamedColor::new("Orange", 0xFF8000),
    NamedColor::new("Purple", 0x8000FF),
    NamedColor::new("White", 0xFFFFFF),
];
