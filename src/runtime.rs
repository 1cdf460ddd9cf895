//! Hardware side of the controller
//!
//! Owns the strip driver, clock, buttons and display, and implements the
//! [`EffectContext`] the effects run against.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    Clock, OutputDriver,
    color::{BLACK, Rgb},
    effect::EffectContext,
    filter::BrightnessFilter,
    pacer::FramePacer,
    sampler::{InputSampler, PressEvent},
    state::AppState,
    status::{DisplayError, StatusDisplay, StatusLines, StatusPanel},
};

/// Strip, buttons, display and clock of a controller with `N` LEDs
pub struct Runtime<O, C, M, K, D, const N: usize> {
    driver: O,
    clock: C,
    sampler: InputSampler<M, K>,
    panel: StatusPanel<D>,
    state: AppState,
    filter: BrightnessFilter,
    pacer: FramePacer,
    /// Scratch buffer holding the brightness-scaled frame
    output: [Rgb; N],
}

impl<O, C, M, K, D, const N: usize> Runtime<O, C, M, K, D, N>
where
    O: OutputDriver,
    C: Clock,
    M: InputPin,
    K: InputPin,
    D: StatusDisplay,
{
    pub const fn new(
        driver: O,
        clock: C,
        sampler: InputSampler<M, K>,
        panel: StatusPanel<D>,
        state: AppState,
        filter: BrightnessFilter,
        pacer: FramePacer,
    ) -> Self {
        Self {
            driver,
            clock,
            sampler,
            panel,
            state,
            filter,
            pacer,
            output: [BLACK; N],
        }
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub const fn driver(&self) -> &O {
        &self.driver
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub const fn panel(&self) -> &StatusPanel<D> {
        &self.panel
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Status text for the current selection
    pub fn status(&self) -> StatusLines {
        StatusLines::for_state(&self.state, N)
    }

    /// Probe the display
    pub fn detect_display(&mut self) -> Result<(), DisplayError> {
        self.panel.detect()
    }

    /// Show `lines` on the display, if there is one
    pub fn show(&mut self, lines: &StatusLines) {
        self.panel.show(lines);
    }

    /// Show the current selection and restart the display idle timer
    pub fn show_status(&mut self) {
        let now = self.clock.now();
        self.panel.touch(now);
        let status = self.status();
        self.panel.show(&status);
    }

    /// Blank the strip
    pub fn clear(&mut self) {
        self.output = [BLACK; N];
        self.driver.write(&self.output);
    }

    /// Block without polling the buttons
    pub fn sleep(&mut self, duration: Duration) {
        if duration > Duration::from_ticks(0) {
            self.clock.sleep(duration);
        }
        self.pacer.reset();
    }

    /// Forget frame pacing, the next hold starts from now
    pub fn restart_pacing(&mut self) {
        self.pacer.reset();
    }

    /// Apply accepted presses to the state
    ///
    /// While the display sleeps, a press only wakes it.
    fn accept(&mut self, presses: PressEvent, now: Instant) -> PressEvent {
        if self.panel.is_sleeping() {
            let status = self.status();
            self.panel.wake(now, &status);
            #[cfg(feature = "esp32-log")]
            println!("[Runtime.accept] display woken");
            return PressEvent {
                wake: true,
                ..PressEvent::NONE
            };
        }

        if presses.mode {
            let _effect = self.state.next_effect();
            #[cfg(feature = "esp32-log")]
            println!("[Runtime.accept] effect changed to: {}", _effect.as_str());
        }
        if presses.color {
            let _color = self.state.next_color();
            #[cfg(feature = "esp32-log")]
            println!("[Runtime.accept] color changed to: {}", _color.name);
        }

        self.panel.touch(now);
        let status = self.status();
        self.panel.show(&status);
        presses
    }
}

impl<O, C, M, K, D, const N: usize> EffectContext for Runtime<O, C, M, K, D, N>
where
    O: OutputDriver,
    C: Clock,
    M: InputPin,
    K: InputPin,
    D: StatusDisplay,
{
    fn present(&mut self, leds: &[Rgb], brightness: Option<u8>) {
        let len = leds.len().min(N);
        let output = &mut self.output[..len];
        output.copy_from_slice(&leds[..len]);
        self.filter.apply(output, brightness);
        self.driver.write(output);
    }

    fn poll(&mut self) -> PressEvent {
        let now = self.clock.now();
        let presses = self.sampler.sample(now);
        if !presses.any() {
            self.panel.check_idle(now);
            return PressEvent::NONE;
        }
        self.accept(presses, now)
    }

    fn wait(&mut self, duration: Duration) -> PressEvent {
        let now = self.clock.now();
        self.pacer.start(now, duration);

        while let Some(slice) = self.pacer.next_slice(self.clock.now()) {
            self.clock.sleep(slice);
            let event = self.poll();
            if event.any() {
                self.pacer.reset();
                return event;
            }
        }
        PressEvent::NONE
    }
}
