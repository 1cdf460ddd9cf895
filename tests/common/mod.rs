#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
};

use embedded_hal::digital::{ErrorType, InputPin};
use neopixel_controller::{
    Clock, Controller, ControllerConfig, DisplayError, Duration, EffectContext, Instant,
    OutputDriver, PressEvent, Rgb, StatusDisplay, StatusLines,
};

/// Simulated time shared between the clock and the pins
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn millis(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms.get())
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration.as_millis().max(1));
    }
}

/// Button pin pulled low during scripted time windows
#[derive(Debug, Clone)]
pub struct ScriptedPin {
    clock: ManualClock,
    windows: Rc<RefCell<Vec<(u64, u64)>>>,
}

impl ScriptedPin {
    pub fn new(clock: &ManualClock) -> Self {
        Self {
            clock: clock.clone(),
            windows: Rc::default(),
        }
    }

    /// Hold the button from `at_ms` for `for_ms`
    pub fn press(&self, at_ms: u64, for_ms: u64) {
        self.windows.borrow_mut().push((at_ms, at_ms + for_ms));
    }
}

impl ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let now = self.clock.millis();
        Ok(self
            .windows
            .borrow()
            .iter()
            .any(|&(start, end)| start <= now && now < end))
    }
}

/// Driver keeping every written frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<&Vec<Rgb>> {
        self.frames.last()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Calls seen by a [`RecordingDisplay`]
#[derive(Debug, Default)]
pub struct DisplayLog {
    pub inits: usize,
    pub shown: Vec<[String; 3]>,
    pub sleeps: usize,
    pub wakes: usize,
}

/// Display recording its calls into a shared log
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    pub log: Rc<RefCell<DisplayLog>>,
    init_result: Result<(), DisplayError>,
}

impl RecordingDisplay {
    pub fn working() -> Self {
        Self {
            log: Rc::default(),
            init_result: Ok(()),
        }
    }

    pub fn failing(err: DisplayError) -> Self {
        Self {
            log: Rc::default(),
            init_result: Err(err),
        }
    }

    pub fn show_count(&self) -> usize {
        self.log.borrow().shown.len()
    }

    pub fn last_shown(&self) -> Option<[String; 3]> {
        self.log.borrow().shown.last().cloned()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.log.borrow_mut().inits += 1;
        self.init_result
    }

    fn show(&mut self, lines: &StatusLines) -> Result<(), DisplayError> {
        let copy = [0, 1, 2].map(|i| String::from(lines.line(i)));
        self.log.borrow_mut().shown.push(copy);
        Ok(())
    }

    fn sleep(&mut self) -> Result<(), DisplayError> {
        self.log.borrow_mut().sleeps += 1;
        Ok(())
    }

    fn wake(&mut self) -> Result<(), DisplayError> {
        self.log.borrow_mut().wakes += 1;
        Ok(())
    }
}

/// LED count used by the controller tests
pub const TEST_LEDS: usize = 12;

pub type TestController =
    Controller<RecordingDriver, ManualClock, ScriptedPin, ScriptedPin, RecordingDisplay, TEST_LEDS>;

/// Controller wired to mocks, plus handles to drive it
pub struct Harness {
    pub controller: TestController,
    pub clock: ManualClock,
    pub mode: ScriptedPin,
    pub color: ScriptedPin,
    pub display: RecordingDisplay,
}

/// Config without startup pauses, display sleep or dispatch pause
pub fn test_config() -> ControllerConfig {
    ControllerConfig {
        display_timeout: None,
        splash: Duration::from_millis(0),
        settle: Duration::from_millis(0),
        dispatch_pause: Duration::from_millis(0),
        ..ControllerConfig::default()
    }
}

pub fn harness(config: &ControllerConfig) -> Harness {
    harness_with_display(config, RecordingDisplay::working())
}

pub fn harness_with_display(config: &ControllerConfig, display: RecordingDisplay) -> Harness {
    let clock = ManualClock::default();
    let mode = ScriptedPin::new(&clock);
    let color = ScriptedPin::new(&clock);
    let controller = Controller::new(
        RecordingDriver::default(),
        clock.clone(),
        mode.clone(),
        color.clone(),
        Some(display.clone()),
        config,
    );
    Harness {
        controller,
        clock,
        mode,
        color,
        display,
    }
}

/// Effect context with a synthetic button
///
/// Reports a mode press on poll number `press_on_poll` (1-based), never
/// otherwise. Waiting counts as one poll.
#[derive(Debug, Default)]
pub struct SyntheticContext {
    pub press_on_poll: Option<usize>,
    pub polls: usize,
    pub frames: Vec<(Vec<Rgb>, Option<u8>)>,
    pub waited: Vec<Duration>,
}

impl SyntheticContext {
    pub fn pressing_on_poll(poll: usize) -> Self {
        Self {
            press_on_poll: Some(poll),
            ..Self::default()
        }
    }

    fn next_poll(&mut self) -> PressEvent {
        self.polls += 1;
        if self.press_on_poll == Some(self.polls) {
            PressEvent {
                mode: true,
                ..PressEvent::NONE
            }
        } else {
            PressEvent::NONE
        }
    }
}

impl EffectContext for SyntheticContext {
    fn present(&mut self, leds: &[Rgb], brightness: Option<u8>) {
        self.frames.push((leds.to_vec(), brightness));
    }

    fn poll(&mut self) -> PressEvent {
        self.next_poll()
    }

    fn wait(&mut self, duration: Duration) -> PressEvent {
        self.waited.push(duration);
        self.next_poll()
    }
}
