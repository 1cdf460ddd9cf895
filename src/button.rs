//! Debounced push buttons
//!
//! Buttons are wired active low: the pin reads low while pressed.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

/// Time-based debounce for a single button
///
/// A press is accepted on the released -> pressed edge, and only when
/// more than `window` has passed since the previously accepted press.
/// The first press is always accepted.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    /// Level seen by the previous sample
    was_pressed: bool,
    /// Time of the last accepted press
    last_accepted: Option<Instant>,
}

impl Debouncer {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            was_pressed: false,
            last_accepted: None,
        }
    }

    /// Feed one sample
    ///
    /// Returns `true` if this sample is an accepted press.
    pub fn update(&mut self, is_pressed: bool, now: Instant) -> bool {
        let is_edge = is_pressed && !self.was_pressed;
        self.was_pressed = is_pressed;
        if !is_edge {
            return false;
        }

        let settled = self
            .last_accepted
            .is_none_or(|at| now.saturating_duration_since(at) > self.window);
        if settled {
            self.last_accepted = Some(now);
        }
        settled
    }

    /// Time of the last accepted press
    pub const fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }

    pub const fn window(&self) -> Duration {
        self.window
    }
}

/// Push button on a digital input pin
#[derive(Debug)]
pub struct Button<P> {
    pin: P,
    debouncer: Debouncer,
}

impl<P> Button<P> {
    pub const fn new(pin: P, window: Duration) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(window),
        }
    }

    pub const fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

impl<P: InputPin> Button<P> {
    /// Read the pin and run it through the debouncer
    ///
    /// A failed pin read counts as released.
    pub fn sample(&mut self, now: Instant) -> bool {
        let is_pressed = self.pin.is_low().unwrap_or(false);
        self.debouncer.update(is_pressed, now)
    }
}
