#![no_std]

pub mod button;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod math8;
pub mod output;
pub mod pacer;
pub mod random;
pub mod runtime;
pub mod sampler;
pub mod state;
pub mod status;

pub use clock::{Clock, SystemClock};
pub use config::ControllerConfig;
pub use controller::Controller;
pub use effect::{EffectContext, EffectId, EffectSlot, FrameStep, InterruptReason};
pub use output::SmartLedsOutput;
pub use sampler::{InputSampler, PressEvent};
pub use state::AppState;
pub use status::{DisplayError, NoDisplay, StatusDisplay, StatusLines};

pub use color::{NamedColor, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait. A write is one atomic
/// transfer of the whole frame.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
