//! Status display
//!
//! The display is optional: it is probed once at startup, and when it is
//! missing or fails to initialise every later update is skipped.

use core::fmt::{self, Write};

use embassy_time::{Duration, Instant};
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::state::AppState;

/// Characters per status line
pub const LINE_CAPACITY: usize = 24;

/// Effect names longer than this are shortened
const NAME_LIMIT: usize = 16;
/// Characters kept from a shortened name, before the ellipsis
const NAME_KEEP: usize = 13;

pub type StatusLine = String<LINE_CAPACITY>;

/// Errors reported by a status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// No display answered on the bus
    NotDetected,
    /// The display was found but could not be initialised
    InitFailed,
    /// Updating the display failed
    WriteFailed,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDetected => f.write_str("display not detected"),
            Self::InitFailed => f.write_str("display initialisation failed"),
            Self::WriteFailed => f.write_str("display update failed"),
        }
    }
}

impl core::error::Error for DisplayError {}

/// Abstract text display
///
/// Implement this trait for the display driver of the board.
pub trait StatusDisplay {
    /// Probe and initialise the display
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Replace the display contents with `lines`
    fn show(&mut self, lines: &StatusLines) -> Result<(), DisplayError>;

    /// Blank the display and put it in low-power mode
    fn sleep(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Leave low-power mode
    fn wake(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

/// Placeholder for boards without a display
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl StatusDisplay for NoDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        Err(DisplayError::NotDetected)
    }

    fn show(&mut self, _lines: &StatusLines) -> Result<(), DisplayError> {
        Err(DisplayError::NotDetected)
    }
}

/// Three lines of status text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLines {
    lines: [StatusLine; 3],
}

impl StatusLines {
    /// Text shown while the controller starts
    pub fn splash() -> Self {
        let mut status = Self::default();
        let _ = status.lines[0].push_str("NeoPixel");
        let _ = status.lines[1].push_str("Controller");
        let _ = status.lines[2].push_str("Starting...");
        status
    }

    /// Describe the current selection
    ///
    /// The second line names the color for color-driven effects, the
    /// built-in palette for palette effects, and stays empty when off.
    pub fn for_state(state: &AppState, pixel_count: usize) -> Self {
        let effect = state.effect();
        let mut status = Self::default();

        let name = effect.as_str();
        if name.len() > NAME_LIMIT {
            let kept = name.get(..NAME_KEEP).unwrap_or(name);
            let _ = write!(status.lines[0], "Mode: {kept}...");
        } else {
            let _ = write!(status.lines[0], "Mode: {name}");
        }

        if effect.uses_color() {
            let _ = write!(status.lines[1], "Color: {}", state.color().name);
        } else if let Some(palette) = effect.palette_name() {
            let _ = write!(status.lines[1], "Color: {palette}");
        }

        if effect.uses_color() || effect.palette_name().is_some() {
            let _ = write!(status.lines[2], "LEDs: {pixel_count}");
        } else {
            let _ = status.lines[2].push_str("Status: OFF");
        }

        status
    }

    pub fn lines(&self) -> &[StatusLine; 3] {
        &self.lines
    }

    /// Line `index` as text, empty if out of range
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map_or("", StatusLine::as_str)
    }
}

/// Optional display with idle sleep
#[derive(Debug)]
pub struct StatusPanel<D> {
    device: Option<D>,
    sleeping: bool,
    last_activity: Instant,
    timeout: Option<Duration>,
}

impl<D: StatusDisplay> StatusPanel<D> {
    pub const fn new(device: Option<D>, timeout: Option<Duration>) -> Self {
        Self {
            device,
            sleeping: false,
            last_activity: Instant::from_millis(0),
            timeout,
        }
    }

    /// Probe the display once
    ///
    /// On failure the display is dropped and every later call is a no-op.
    pub fn detect(&mut self) -> Result<(), DisplayError> {
        let Some(device) = self.device.as_mut() else {
            return Err(DisplayError::NotDetected);
        };
        if let Err(err) = device.init() {
            #[cfg(feature = "esp32-log")]
            println!("[StatusPanel.detect] display disabled: {}", err);
            self.device = None;
            return Err(err);
        }
        Ok(())
    }

    /// Check if a working display is attached
    pub const fn is_available(&self) -> bool {
        self.device.is_some()
    }

    pub const fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }

    /// Show `lines` unless the display is missing or asleep
    pub fn show(&mut self, lines: &StatusLines) {
        if self.sleeping {
            return;
        }
        let Some(device) = self.device.as_mut() else {
            return;
        };
        if let Err(_err) = device.show(lines) {
            #[cfg(feature = "esp32-log")]
            println!("[StatusPanel.show] update error: {}", _err);
        }
    }

    /// Record user activity
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// Put the display to sleep once it has been idle for the timeout
    pub fn check_idle(&mut self, now: Instant) {
        let Some(timeout) = self.timeout else {
            return;
        };
        if self.sleeping || now.saturating_duration_since(self.last_activity) <= timeout {
            return;
        }
        let Some(device) = self.device.as_mut() else {
            return;
        };
        if let Err(_err) = device.sleep() {
            #[cfg(feature = "esp32-log")]
            println!("[StatusPanel.check_idle] sleep error: {}", _err);
        }
        #[cfg(feature = "esp32-log")]
        println!("[StatusPanel.check_idle] display asleep");
        self.sleeping = true;
    }

    /// Wake the display and show `lines`
    pub fn wake(&mut self, now: Instant, lines: &StatusLines) {
        self.last_activity = now;
        if !self.sleeping {
            return;
        }
        if let Some(device) = self.device.as_mut() {
            if let Err(_err) = device.wake() {
                #[cfg(feature = "esp32-log")]
                println!("[StatusPanel.wake] wake error: {}", _err);
            }
        }
        self.sleeping = false;
        self.show(lines);
    }
}
