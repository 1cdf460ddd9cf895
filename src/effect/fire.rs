//! Fire effect
//!
//! Classic heat simulation: every cell cools down a little, heat drifts
//! up the strip and random sparks ignite near the bottom. Heat is then
//! mapped onto a red -> orange -> yellow-white ramp.

use embassy_time::Duration;

use super::{Effect, FrameStep};
use crate::{
    color::{BLACK, Rgb, fill},
    random::Prng,
};

/// How much the cells cool down per frame
const COOLING: usize = 10;
/// Chance (out of 255) of a new spark per frame
const SPARKING: u8 = 120;
/// Sparks only ignite in the first LEDs of the strip
const SPARK_ZONE: usize = 8;
const SPARK_HEAT_MIN: u8 = 160;

const FRAME_HOLD: Duration = Duration::from_millis(20);

const SEED: u64 = 0x5eed_f17e;

/// Flickering flame over `N` LEDs
#[derive(Debug, Clone)]
pub struct FireEffect<const N: usize> {
    heat: [u8; N],
    rng: Prng,
}

impl<const N: usize> Default for FireEffect<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FireEffect<N> {
    pub const fn new() -> Self {
        Self {
            heat: [0; N],
            rng: Prng::new(SEED),
        }
    }

    /// Current heat of every cell
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    /// Map a heat value onto the flame color ramp
    pub const fn heat_color(heat: u8) -> Rgb {
        if heat > 170 {
            Rgb {
                r: 255,
                g: 255,
                b: (heat - 170).saturating_mul(3),
            }
        } else if heat > 85 {
            Rgb {
                r: 255,
                g: (heat - 85).saturating_mul(3),
                b: 0,
            }
        } else {
            Rgb {
                r: heat.saturating_mul(3),
                g: 0,
                b: 0,
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn simulate(&mut self, len: usize) {
        let heat = &mut self.heat[..len];

        let max_cooling = u8::try_from(COOLING * 10 / len + 2).unwrap_or(u8::MAX);
        for cell in heat.iter_mut() {
            *cell = cell.saturating_sub(self.rng.range(0, max_cooling));
        }

        for i in (2..len).rev() {
            let drift = u16::from(heat[i - 1]) + 2 * u16::from(heat[i - 2]);
            heat[i] = (drift / 3) as u8;
        }

        if self.rng.range(0, 255) < SPARKING {
            let zone = SPARK_ZONE.min(len) - 1;
            let y = usize::from(self.rng.range(0, zone as u8));
            heat[y] = heat[y].saturating_add(self.rng.range(SPARK_HEAT_MIN, 255));
        }
    }
}

impl<const N: usize> Effect for FireEffect<N> {
    fn render(&mut self, leds: &mut [Rgb]) -> FrameStep {
        let len = leds.len().min(N);
        if len == 0 {
            fill(leds, BLACK);
            return FrameStep::hold(FRAME_HOLD);
        }

        self.simulate(len);
        for (led, &heat) in leds.iter_mut().zip(self.heat.iter()) {
            *led = Self::heat_color(heat);
        }
        FrameStep::hold(FRAME_HOLD)
    }

    fn reset(&mut self) {
        self.heat = [0; N];
        self.rng = Prng::new(SEED);
    }
}
