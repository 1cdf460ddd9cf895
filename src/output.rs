//! LED strip output adapters

use core::fmt::Debug;

use smart_leds::SmartLedsWrite;

use crate::{OutputDriver, color::Rgb};

/// Output driver for any `smart-leds` compatible strip driver
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    /// # Panics
    ///
    /// A failed strip transfer cannot be recovered from and panics.
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(err) = self.writer.write(colors.iter().copied()) {
            panic!("LED strip transfer failed: {err:?}");
        }
    }
}
