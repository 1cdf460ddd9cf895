//! Deterministic pseudo-random numbers for flicker effects.

/// Counter-based generator built on a `SplitMix64` mix
///
/// Every call advances an internal counter and hashes it, so the
/// sequence is fully reproducible from the seed.
#[derive(Debug, Clone)]
pub struct Prng {
    counter: u64,
}

impl Prng {
    pub const fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    #[inline]
    const fn hash(x: u64) -> u64 {
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Next raw 32-bit value
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        self.counter = self.counter.wrapping_add(1);
        (Self::hash(self.counter) >> 32) as u32
    }

    /// Uniform value in `low..=high`
    ///
    /// Returns `low` when the range is empty.
    #[allow(clippy::cast_possible_truncation)]
    pub fn range(&mut self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        let span = u32::from(high - low) + 1;
        low + (self.next_u32() % span) as u8
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::new(0)
    }
}
