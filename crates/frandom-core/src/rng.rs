//! Randomness sources and seeding helpers.
//!
//! Everything here is deterministic and **not** cryptographic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;

/// Anything that hands out uniformly distributed 32-bit words on demand.
///
/// The alias sampler and the float generators only ever need this, so tests can drive them
/// with scripted sequences.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// SplitMix64: the seed mixer.
///
/// Each call advances the owned state by the golden-ratio increment and returns an avalanched
/// projection of the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(state: u64) -> Self {
        Self { state }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}

impl RandomSource for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }
}

/// The SplitMix64 finalizer on its own: two multiply-xorshift rounds.
pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Derives a seed for an independent stream (e.g. one per worker thread) from a base seed.
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    mix64(base ^ mix64(stream.wrapping_add(GOLDEN_GAMMA)))
}

/// Top 24 bits scaled into [0, 1). Baseline conversion with 2^-24 resolution.
pub fn unit_f32(x: u32) -> f32 {
    (x >> 8) as f32 * (1.0 / 16_777_216.0)
}

/// Top 53 bits scaled into [0, 1).
pub fn unit_f64(x: u64) -> f64 {
    (x >> 11) as f64 * (1.0 / 9_007_199_254_740_992.0)
}
