//! Selected effect and color

use crate::{
    color::{COLOR_COUNT, COLOR_TABLE, NamedColor},
    effect::EffectId,
};

/// What the buttons have selected
///
/// Both selections only ever move forward and wrap around, so they are
/// always valid entries of their tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    effect: EffectId,
    color: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EffectId::AllOn, 0)
    }
}

impl AppState {
    pub const fn new(effect: EffectId, color: usize) -> Self {
        Self {
            effect,
            color: color % COLOR_COUNT,
        }
    }

    pub const fn effect(&self) -> EffectId {
        self.effect
    }

    /// Index into [`COLOR_TABLE`]
    pub const fn color_index(&self) -> usize {
        self.color
    }

    pub fn color(&self) -> &'static NamedColor {
        &COLOR_TABLE[self.color]
    }

    /// Advance to the next effect, wrapping after the last one
    pub fn next_effect(&mut self) -> EffectId {
        self.effect = self.effect.next();
        self.effect
    }

    /// Advance to the next color, wrapping after the last one
    pub fn next_color(&mut self) -> &'static NamedColor {
        self.color = (self.color + 1) % COLOR_COUNT;
        self.color()
    }
}
