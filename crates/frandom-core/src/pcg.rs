#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rng::{RandomSource, SplitMix64};

/// PCG32 (XSH-RR): 64 bits of LCG state, 32-bit permuted output.
///
/// | Feature |      |
/// | :------ | :--- |
/// | Bits    | 32   |
/// | Period  | 2^64 |
/// | Streams | 1    |
///
/// One instance per thread; give each its own seed (see [`crate::derive_seed`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    pub const DEFAULT_SEED: u64 = 12345;
    pub const MULTIPLIER: u64 = 6364136223846793005;
    pub const INCREMENT: u64 = 1442695040888963407;

    /// Starts from the raw default state, without mixing.
    pub fn new() -> Self {
        Self {
            state: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut pcg = Self::new();
        pcg.reseed(seed);
        pcg
    }

    /// Re-initializes the state from `seed` through the seed mixer.
    ///
    /// A zero state is never kept: the mixer is re-applied to its own output until non-zero.
    pub fn reseed(&mut self, seed: u64) {
        let mut mixer = SplitMix64::new(seed);
        let mut state = mixer.next_u64();
        while state == 0 {
            state = SplitMix64::new(state).next_u64();
        }
        self.state = state;
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        let x = self.state;
        let rot = (x >> 59) as u32;
        self.state = x.wrapping_mul(Self::MULTIPLIER).wrapping_add(Self::INCREMENT);
        let xorshifted = ((x ^ (x >> 18)) >> 27) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }
}
