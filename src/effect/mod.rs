//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait, and [`EffectSlot::run`] owns
//! the interruptible frame loop shared by all of them.

mod all_on;
mod aurora;
mod breathing;
mod chase;
mod color_wipe;
mod fire;
mod off;
mod pulse;
mod rainbow;
mod runner;

pub use all_on::AllOnEffect;
pub use aurora::AuroraEffect;
pub use breathing::BreathingEffect;
pub use chase::ChaseEffect;
pub use color_wipe::ColorWipeEffect;
use embassy_time::Duration;
pub use fire::FireEffect;
pub use off::OffEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use runner::RunnerEffect;

use crate::{color::Rgb, sampler::PressEvent};

const EFFECT_NAME_ALL_ON: &str = "All On";
const EFFECT_NAME_AURORA: &str = "Aurora";
const EFFECT_NAME_RAINBOW: &str = "Rainbow";
const EFFECT_NAME_COLOR_WIPE: &str = "Color Wipe";
const EFFECT_NAME_CHASE: &str = "Chase";
const EFFECT_NAME_PULSE: &str = "Pulse";
const EFFECT_NAME_RUNNER: &str = "Runner";
const EFFECT_NAME_FIRE: &str = "Fire";
const EFFECT_NAME_BREATHING: &str = "Breathing";
const EFFECT_NAME_OFF: &str = "Off";

const EFFECT_ID_ALL_ON: u8 = 0;
const EFFECT_ID_AURORA: u8 = 1;
const EFFECT_ID_RAINBOW: u8 = 2;
const EFFECT_ID_COLOR_WIPE: u8 = 3;
const EFFECT_ID_CHASE: u8 = 4;
const EFFECT_ID_PULSE: u8 = 5;
const EFFECT_ID_RUNNER: u8 = 6;
const EFFECT_ID_FIRE: u8 = 7;
const EFFECT_ID_BREATHING: u8 = 8;
const EFFECT_ID_OFF: u8 = 9;

/// Number of selectable effects
pub const EFFECT_COUNT: usize = 10;

/// What an effect wants after rendering a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    /// How long the frame stays on the strip
    pub hold: Duration,
    /// Whether the frame has to be written to the strip
    pub present: bool,
    /// Whether this frame finishes one animation cycle
    pub cycle_complete: bool,
}

impl FrameStep {
    /// A new frame that stays on the strip for `hold`
    pub const fn hold(hold: Duration) -> Self {
        Self {
            hold,
            present: true,
            cycle_complete: false,
        }
    }

    /// A frame identical to the one already on the strip
    #[must_use]
    pub const fn unchanged(mut self) -> Self {
        self.present = false;
        self
    }

    /// Mark the frame as the last of the cycle
    #[must_use]
    pub const fn end_of_cycle(mut self) -> Self {
        self.cycle_complete = true;
        self
    }
}

/// Why [`EffectSlot::run`] gave control back to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptReason {
    /// A button event arrived while the effect was running
    ButtonPress(PressEvent),
    /// The effect finished one animation cycle
    CycleComplete,
}

/// Hardware access for a running effect
pub trait EffectContext {
    /// Write a frame to the strip
    ///
    /// `brightness` overrides the global brightness when set.
    fn present(&mut self, leds: &[Rgb], brightness: Option<u8>);

    /// Sample the buttons once
    fn poll(&mut self) -> PressEvent;

    /// Wait for `duration`, polling the buttons while waiting
    ///
    /// Returns early with the first non-empty event.
    fn wait(&mut self, duration: Duration) -> PressEvent;
}

pub trait Effect {
    /// Brightness ceiling replacing the global brightness
    const BRIGHTNESS: Option<u8> = None;

    /// Render the next frame
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep;

    /// Restart the animation from its first frame
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
///
/// `N` is the number of LEDs on the strip.
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    AllOn(AllOnEffect),
    Aurora(AuroraEffect),
    Rainbow(RainbowEffect),
    ColorWipe(ColorWipeEffect),
    Chase(ChaseEffect),
    Pulse(PulseEffect),
    Runner(RunnerEffect),
    Fire(FireEffect<N>),
    Breathing(BreathingEffect),
    Off(OffEffect),
}

/// Known effect ids, in button order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    AllOn = EFFECT_ID_ALL_ON,
    Aurora = EFFECT_ID_AURORA,
    Rainbow = EFFECT_ID_RAINBOW,
    ColorWipe = EFFECT_ID_COLOR_WIPE,
    Chase = EFFECT_ID_CHASE,
    Pulse = EFFECT_ID_PULSE,
    Runner = EFFECT_ID_RUNNER,
    Fire = EFFECT_ID_FIRE,
    Breathing = EFFECT_ID_BREATHING,
    Off = EFFECT_ID_OFF,
}

impl EffectId {
    /// All effects in button order
    pub const ALL: [Self; EFFECT_COUNT] = [
        Self::AllOn,
        Self::Aurora,
        Self::Rainbow,
        Self::ColorWipe,
        Self::Chase,
        Self::Pulse,
        Self::Runner,
        Self::Fire,
        Self::Breathing,
        Self::Off,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_ALL_ON => Self::AllOn,
            EFFECT_ID_AURORA => Self::Aurora,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_COLOR_WIPE => Self::ColorWipe,
            EFFECT_ID_CHASE => Self::Chase,
            EFFECT_ID_PULSE => Self::Pulse,
            EFFECT_ID_RUNNER => Self::Runner,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_BREATHING => Self::Breathing,
            EFFECT_ID_OFF => Self::Off,
            _ => return None,
        })
    }

    /// Effect at `index`, wrapped around the effect count
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % EFFECT_COUNT]
    }

    /// Position in button order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The effect selected by the next mode press
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllOn => EFFECT_NAME_ALL_ON,
            Self::Aurora => EFFECT_NAME_AURORA,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::ColorWipe => EFFECT_NAME_COLOR_WIPE,
            Self::Chase => EFFECT_NAME_CHASE,
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Runner => EFFECT_NAME_RUNNER,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Breathing => EFFECT_NAME_BREATHING,
            Self::Off => EFFECT_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Check if the effect is drawn with the selected color
    pub const fn uses_color(self) -> bool {
        !matches!(self, Self::Aurora | Self::Rainbow | Self::Fire | Self::Off)
    }

    /// Name of the built-in palette of effects that ignore the selected color
    pub const fn palette_name(self) -> Option<&'static str> {
        match self {
            Self::Aurora => Some(EFFECT_NAME_AURORA),
            Self::Rainbow => Some(EFFECT_NAME_RAINBOW),
            Self::Fire => Some(EFFECT_NAME_FIRE),
            _ => None,
        }
    }

    pub fn to_slot<const N: usize>(self, color: Rgb) -> EffectSlot<N> {
        match self {
            Self::AllOn => EffectSlot::AllOn(AllOnEffect::new(color)),
            Self::Aurora => EffectSlot::Aurora(AuroraEffect::new()),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::ColorWipe => EffectSlot::ColorWipe(ColorWipeEffect::new(color)),
            Self::Chase => EffectSlot::Chase(ChaseEffect::new(color)),
            Self::Pulse => EffectSlot::Pulse(PulseEffect::new(color)),
            Self::Runner => EffectSlot::Runner(RunnerEffect::new(color)),
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::Breathing => EffectSlot::Breathing(BreathingEffect::new(color)),
            Self::Off => EffectSlot::Off(OffEffect::new()),
        }
    }
}

impl<const N: usize> Default for EffectSlot<N> {
    fn default() -> Self {
        Self::Off(OffEffect::new())
    }
}

impl<const N: usize> EffectSlot<N> {
    /// Brightness override of the current effect
    ///
    /// Derived from each effect's `Effect::BRIGHTNESS` constant.
    pub fn brightness(&self) -> Option<u8> {
        match self {
            Self::AllOn(_) => AllOnEffect::BRIGHTNESS,
            Self::Aurora(_) => AuroraEffect::BRIGHTNESS,
            Self::Rainbow(_) => RainbowEffect::BRIGHTNESS,
            Self::ColorWipe(_) => ColorWipeEffect::BRIGHTNESS,
            Self::Chase(_) => ChaseEffect::BRIGHTNESS,
            Self::Pulse(_) => PulseEffect::BRIGHTNESS,
            Self::Runner(_) => RunnerEffect::BRIGHTNESS,
            Self::Fire(_) => FireEffect::<N>::BRIGHTNESS,
            Self::Breathing(_) => BreathingEffect::BRIGHTNESS,
            Self::Off(_) => OffEffect::BRIGHTNESS,
        }
    }

    /// Render the next frame of the current effect
    pub fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        match self {
            Self::AllOn(effect) => effect.render(leds),
            Self::Aurora(effect) => effect.render(leds),
            Self::Rainbow(effect) => effect.render(leds),
            Self::ColorWipe(effect) => effect.render(leds),
            Self::Chase(effect) => effect.render(leds),
            Self::Pulse(effect) => effect.render(leds),
            Self::Runner(effect) => effect.render(leds),
            Self::Fire(effect) => effect.render(leds),
            Self::Breathing(effect) => effect.render(leds),
            Self::Off(effect) => effect.render(leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::AllOn(effect) => Effect::reset(effect),
            Self::Aurora(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::ColorWipe(effect) => Effect::reset(effect),
            Self::Chase(effect) => Effect::reset(effect),
            Self::Pulse(effect) => Effect::reset(effect),
            Self::Runner(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
            Self::Breathing(effect) => Effect::reset(effect),
            Self::Off(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::AllOn(_) => EffectId::AllOn,
            Self::Aurora(_) => EffectId::Aurora,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::ColorWipe(_) => EffectId::ColorWipe,
            Self::Chase(_) => EffectId::Chase,
            Self::Pulse(_) => EffectId::Pulse,
            Self::Runner(_) => EffectId::Runner,
            Self::Fire(_) => EffectId::Fire,
            Self::Breathing(_) => EffectId::Breathing,
            Self::Off(_) => EffectId::Off,
        }
    }

    /// Update the color of the current effect
    ///
    /// Palette effects ignore the call.
    pub fn set_color(&mut self, color: Rgb) {
        match self {
            Self::AllOn(effect) => effect.set_color(color),
            Self::ColorWipe(effect) => effect.set_color(color),
            Self::Chase(effect) => effect.set_color(color),
            Self::Pulse(effect) => effect.set_color(color),
            Self::Runner(effect) => effect.set_color(color),
            Self::Breathing(effect) => effect.set_color(color),
            Self::Aurora(_) | Self::Rainbow(_) | Self::Fire(_) | Self::Off(_) => {}
        }
    }

    /// Run the effect until a button event or the end of its cycle
    ///
    /// Every frame is presented, then the buttons are polled right away
    /// and again throughout the frame hold, so a press ends the loop
    /// before the next frame is rendered.
    pub fn run<X: EffectContext>(&mut self, leds: &mut [Rgb], ctx: &mut X) -> InterruptReason {
        let brightness = self.brightness();
        loop {
            let step = self.render(leds);
            if step.present {
                ctx.present(leds, brightness);
            }

            let event = ctx.poll();
            if event.any() {
                return InterruptReason::ButtonPress(event);
            }

            let event = ctx.wait(step.hold);
            if event.any() {
                return InterruptReason::ButtonPress(event);
            }

            if step.cycle_complete {
                return InterruptReason::CycleComplete;
            }
        }
    }
}
