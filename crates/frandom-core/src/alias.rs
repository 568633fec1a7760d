//! Walker/Vose alias table over the power-of-two weights `2^0, 2^1, .., 2^(size - 1)`.
//!
//! Construction is O(size) and deterministic; sampling is O(1) and costs two 32-bit draws.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AliasError;
use crate::rng::RandomSource;

const CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AliasTable {
    weights: [u32; CAPACITY],
    aliases: [u32; CAPACITY],
    size: u32,
    average: u32,
    drained: u32,
    drain_deficit: i64,
}

impl AliasTable {
    pub const MAX_SIZE: u32 = CAPACITY as u32;

    /// Builds a table for `size` buckets.
    ///
    /// Panics unless `size` is a power of two in `1..=32`; see [`AliasTable::try_build`].
    pub fn build(size: u32) -> Self {
        let mut table = Self::default();
        table.rebuild(size);
        table
    }

    pub fn try_build(size: u32) -> Result<Self, AliasError> {
        if !Self::is_valid_size(size) {
            return Err(AliasError::InvalidSize(size));
        }
        Ok(Self::build(size))
    }

    pub fn is_valid_size(size: u32) -> bool {
        size.is_power_of_two() && size <= Self::MAX_SIZE
    }

    /// Rebuilds in place. Not safe against concurrent readers; callers need `&mut`.
    pub fn rebuild(&mut self, size: u32) {
        assert!(
            Self::is_valid_size(size),
            "alias table size must be a power of two in 1..=32, got {size}"
        );

        let n = size as usize;
        let average = 1u32 << (size - size.ilog2());

        // Working weights; the donor side of each pairing is debited here.
        let mut work = [0u32; CAPACITY];
        for (i, w) in work.iter_mut().take(n).enumerate() {
            *w = 1u32 << i;
        }

        *self = Self {
            size,
            average,
            ..Self::default()
        };
        for (i, alias) in self.aliases.iter_mut().take(n).enumerate() {
            *alias = i as u32;
        }

        // Underfull indices stack up from the front of `indices`, overfull ones from the back.
        let mut indices = [0u32; CAPACITY];
        let mut under_len = 0usize;
        let mut over_start = n;
        for i in 0..n {
            if average <= work[i] {
                over_start -= 1;
                indices[over_start] = i as u32;
            } else {
                indices[under_len] = i as u32;
                under_len += 1;
            }
        }

        while under_len > 0 && over_start < n {
            under_len -= 1;
            let under = indices[under_len] as usize;
            let over = indices[over_start] as usize;
            over_start += 1;

            self.aliases[under] = over as u32;
            self.weights[under] = work[under];
            // `work[under] < average`, so this is a subtraction carried out modulo 2^32.
            work[over] = work[over].wrapping_add(work[under]).wrapping_sub(average);

            if work[over] < average {
                indices[under_len] = over as u32;
                under_len += 1;
            } else {
                over_start -= 1;
                indices[over_start] = over as u32;
            }
        }

        // Closure: whatever is left keeps its own bucket at full height. With weights summing to
        // 2^size - 1 against size * average = 2^size, exactly one underfull bucket short by one
        // unit ends up here.
        let leftovers = indices[..under_len]
            .iter()
            .rev()
            .chain(indices[over_start..n].iter());
        for &i in leftovers {
            let i = i as usize;
            let deficit = i64::from(average) - i64::from(work[i]);
            if deficit.abs() > 1 {
                tracing::warn!(
                    bucket = i,
                    residual = work[i],
                    average,
                    "alias table drain out of balance"
                );
            } else {
                tracing::debug!(bucket = i, residual = work[i], average, "alias table drain");
            }
            self.weights[i] = average;
            self.aliases[i] = i as u32;
            self.drained += 1;
            self.drain_deficit += deficit;
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn average(&self) -> u32 {
        self.average
    }

    pub fn weight(&self, i: u32) -> u32 {
        assert!(i < self.size, "alias table index {i} out of range (size {})", self.size);
        self.weights[i as usize]
    }

    pub fn alias(&self, i: u32) -> u32 {
        assert!(i < self.size, "alias table index {i} out of range (size {})", self.size);
        self.aliases[i as usize]
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights[..self.size as usize]
    }

    pub fn aliases(&self) -> &[u32] {
        &self.aliases[..self.size as usize]
    }

    /// Buckets settled by the closure step of the last build.
    pub fn drained(&self) -> u32 {
        self.drained
    }

    /// Sum of `average - residual` over the drained buckets.
    pub fn drain_deficit(&self) -> i64 {
        self.drain_deficit
    }

    /// Draws an index in `0..size` with probability proportional to `2^index`.
    ///
    /// The table must be built. An empty table is only checked in debug builds; release builds
    /// return an unspecified index or panic on the bucket lookup.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        debug_assert!(self.size > 0, "sampling from an empty alias table");
        let index = rng.next_u32() & self.size.wrapping_sub(1);
        let threshold = rng.next_u32() & self.average.wrapping_sub(1);
        if threshold < self.weights[index as usize] {
            index
        } else {
            self.aliases[index as usize]
        }
    }
}

impl Default for AliasTable {
    /// An empty table; call [`AliasTable::rebuild`] before sampling.
    fn default() -> Self {
        Self {
            weights: [0; CAPACITY],
            aliases: [0; CAPACITY],
            size: 0,
            average: 0,
            drained: 0,
            drain_deficit: 0,
        }
    }
}
