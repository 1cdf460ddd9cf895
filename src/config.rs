//! Board constants and controller tuning
//!
//! Everything here is fixed at compile time. Board binaries pick the pins
//! below when wiring up the HAL and hand [`ControllerConfig`] to the
//! controller.

use embassy_time::Duration;

use crate::effect::EffectId;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = 66;

/// GPIO driving the strip data line (through a 470R resistor)
pub const LED_PIN: u8 = 5;
/// GPIO of the mode button (internal pull-up, active low)
pub const MODE_BUTTON_PIN: u8 = 10;
/// GPIO of the color button (internal pull-up, active low)
pub const COLOR_BUTTON_PIN: u8 = 20;

/// Display I2C clock line
pub const I2C_SCL_PIN: u8 = 9;
/// Display I2C data line
pub const I2C_SDA_PIN: u8 = 8;
/// Display I2C bus frequency
pub const I2C_FREQUENCY_HZ: u32 = 400_000;
/// Display resolution
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 32;

/// Minimum interval between two accepted presses of the same button
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// Idle time after which the display is put to sleep
pub const DISPLAY_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest time an effect may go without polling the buttons
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Global output brightness (77/255 ~ 0.3)
pub const DEFAULT_BRIGHTNESS: u8 = 77;

/// How long the startup splash stays on the display
pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Pause after the first status render before effects start
pub const SETTLE_DURATION: Duration = Duration::from_secs(1);

/// Pause between two effect cycles
pub const DISPATCH_PAUSE: Duration = Duration::from_millis(10);

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Effect shown after startup
    pub effect: EffectId,
    /// Index into [`crate::color::COLOR_TABLE`], wrapped on use
    pub color: usize,
    /// Global brightness applied to every frame (0-255)
    pub brightness: u8,
    pub debounce: Duration,
    /// Display sleep timeout, `None` keeps the display always on
    pub display_timeout: Option<Duration>,
    pub poll_interval: Duration,
    pub splash: Duration,
    pub settle: Duration,
    pub dispatch_pause: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::AllOn,
            color: 0,
            brightness: DEFAULT_BRIGHTNESS,
            debounce: DEBOUNCE_WINDOW,
            display_timeout: Some(DISPLAY_TIMEOUT),
            poll_interval: POLL_INTERVAL,
            splash: SPLASH_DURATION,
            settle: SETTLE_DURATION,
            dispatch_pause: DISPATCH_PAUSE,
        }
    }
}
