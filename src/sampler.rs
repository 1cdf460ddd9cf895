//! Input sampling for the mode and color buttons.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::button::Button;

/// Buttons that produced an event during one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressEvent {
    /// Mode button pressed, effect advanced
    pub mode: bool,
    /// Color button pressed, color advanced
    pub color: bool,
    /// A press only woke the display, state is unchanged
    pub wake: bool,
}

impl PressEvent {
    pub const NONE: Self = Self {
        mode: false,
        color: false,
        wake: false,
    };

    /// Check if anything happened
    pub const fn any(self) -> bool {
        self.mode || self.color || self.wake
    }
}

/// Samples both buttons
///
/// Reports raw accepted presses only. Turning them into state changes is
/// up to the caller.
#[derive(Debug)]
pub struct InputSampler<M, K> {
    mode: Button<M>,
    color: Button<K>,
}

impl<M: InputPin, K: InputPin> InputSampler<M, K> {
    /// Create a sampler with the same debounce window for both buttons
    pub const fn new(mode_pin: M, color_pin: K, debounce: Duration) -> Self {
        Self {
            mode: Button::new(mode_pin, debounce),
            color: Button::new(color_pin, debounce),
        }
    }

    /// Sample both buttons once
    pub fn sample(&mut self, now: Instant) -> PressEvent {
        PressEvent {
            mode: self.mode.sample(now),
            color: self.color.sample(now),
            wake: false,
        }
    }

    pub const fn mode_button(&self) -> &Button<M> {
        &self.mode
    }

    pub const fn color_button(&self) -> &Button<K> {
        &self.color
    }
}
