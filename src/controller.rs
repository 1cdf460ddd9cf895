//! Effect dispatcher
//!
//! The controller runs one effect at a time. Each [`Controller::tick`]
//! polls the buttons, runs the current effect until it finishes a cycle or
//! a button is pressed, and applies the press: the mode button switches to
//! the next effect, the color button recolors the current one.

use embassy_time::Duration;
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    Clock, OutputDriver,
    color::{BLACK, Rgb},
    config::ControllerConfig,
    effect::{EffectContext, EffectSlot, InterruptReason},
    filter::BrightnessFilter,
    pacer::FramePacer,
    runtime::Runtime,
    sampler::{InputSampler, PressEvent},
    state::AppState,
    status::{StatusDisplay, StatusLines, StatusPanel},
};

/// Startup and inter-cycle pauses
#[derive(Debug, Clone, Copy)]
struct Pauses {
    splash: Duration,
    settle: Duration,
    dispatch: Duration,
}

/// LED strip controller with `N` LEDs
pub struct Controller<O, C, M, K, D, const N: usize> {
    runtime: Runtime<O, C, M, K, D, N>,
    slot: EffectSlot<N>,
    frame: [Rgb; N],
    pauses: Pauses,
}

impl<O, C, M, K, D, const N: usize> Controller<O, C, M, K, D, N>
where
    O: OutputDriver,
    C: Clock,
    M: InputPin,
    K: InputPin,
    D: StatusDisplay,
{
    /// Create a controller
    ///
    /// Pass `None` as display for boards without one.
    pub fn new(
        driver: O,
        clock: C,
        mode_pin: M,
        color_pin: K,
        display: Option<D>,
        config: &ControllerConfig,
    ) -> Self {
        let state = AppState::new(config.effect, config.color);
        let slot = state.effect().to_slot(state.color().rgb);
        Self {
            runtime: Runtime::new(
                driver,
                clock,
                InputSampler::new(mode_pin, color_pin, config.debounce),
                StatusPanel::new(display, config.display_timeout),
                state,
                BrightnessFilter::new(config.brightness),
                FramePacer::new(config.poll_interval),
            ),
            slot,
            frame: [BLACK; N],
            pauses: Pauses {
                splash: config.splash,
                settle: config.settle,
                dispatch: config.dispatch_pause,
            },
        }
    }

    pub const fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Pixel buffer as rendered by the current effect, before brightness
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub const fn effect(&self) -> &EffectSlot<N> {
        &self.slot
    }

    pub const fn runtime(&self) -> &Runtime<O, C, M, K, D, N> {
        &self.runtime
    }

    /// Bring up the display and strip
    ///
    /// Probes the display once, shows the splash, blanks the strip and
    /// shows the initial status.
    pub fn start(&mut self) {
        let has_display = self.runtime.detect_display().is_ok();

        #[cfg(feature = "esp32-log")]
        {
            use crate::config::{COLOR_BUTTON_PIN, LED_PIN, MODE_BUTTON_PIN};

            let state = self.runtime.state();
            println!("NeoPixel controller starting...");
            println!("Driving {} LEDs on GPIO{}", N, LED_PIN);
            println!("Button 1 (Mode): GPIO{}", MODE_BUTTON_PIN);
            println!("Button 2 (Color): GPIO{}", COLOR_BUTTON_PIN);
            println!(
                "Display: {}",
                if has_display { "Enabled" } else { "Disabled" }
            );
            println!(
                "Starting with: {}, Color: {}",
                state.effect().as_str(),
                state.color().name
            );
        }

        if has_display {
            self.runtime.show(&StatusLines::splash());
        }

        self.frame = [BLACK; N];
        self.runtime.clear();
        self.runtime.sleep(self.pauses.splash);

        self.runtime.show_status();
        self.runtime.sleep(self.pauses.settle);
    }

    /// One dispatcher step
    ///
    /// Returns why the current effect gave control back.
    pub fn tick(&mut self) -> InterruptReason {
        let event = self.runtime.poll();
        self.apply(event);

        let reason = self.slot.run(&mut self.frame, &mut self.runtime);
        if let InterruptReason::ButtonPress(event) = reason {
            self.apply(event);
        }

        let event = self.runtime.wait(self.pauses.dispatch);
        self.apply(event);

        reason
    }

    /// Start up and dispatch forever
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.tick();
        }
    }

    /// Bring the effect slot in line with the state after a press
    fn apply(&mut self, event: PressEvent) {
        let state = *self.runtime.state();

        if event.mode {
            self.slot = state.effect().to_slot(state.color().rgb);
            self.frame = [BLACK; N];
            self.runtime.clear();
            self.runtime.restart_pacing();
        } else if event.color {
            self.slot.set_color(state.color().rgb);
        } else if event.wake {
            self.slot.reset();
            self.runtime.restart_pacing();
        }
    }
}
