//! Uniform `f32` in [0, 1) built straight from bits.
//!
//! Instead of scaling a 24-bit integer, the exponent is drawn from a geometric distribution
//! (one step per leading zero bit of a uniform bit stream) and the 23 mantissa bits are drawn
//! separately, which reaches every representable float down to the flush-to-zero limit.
//! A draw whose 23 mantissa bits are all zero and whose top bit is set rounds up to the next
//! binade, matching round-to-nearest of an infinitely precise uniform real.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseAlgorithmError;
use crate::rng::RandomSource;

/// Biased exponent of 1.0.
const ONE_EXPONENT: i32 = 127;
/// Biased exponent of 0.5, the largest binade below 1.0.
const MAX_EXPONENT: i32 = ONE_EXPONENT - 1;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const TOP_BIT: u32 = 0x8000_0000;

const TABLE_INDEX_SHIFT: u32 = 27;
const TABLE_THRESHOLD_MASK: u32 = (1 << TABLE_INDEX_SHIFT) - 1;

/// Run length (leading zeros plus the terminating one bit) taken when a word's low 27 bits are not
/// below [`WEIGHT_POW2_32BIT`]. Column `32 - alias` of the 32-bucket alias table.
pub const ALIAS_POW2_32BIT: [u8; 32] = [
    4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 32, 5, 4, 3, 2,
];

/// Per-bucket thresholds of the 32-bucket alias table (average `2^27`).
pub const WEIGHT_POW2_32BIT: [u32; 32] = [
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536, 131072,
    262144, 524288, 1048576, 2097152, 4194304, 8388608, 16777216, 33554432, 67108864, 134217728,
    134217727, 134217726, 134217712, 134215680,
];

/// Run length of a non-zero word via the alias tables, distributed like
/// `leading_zeros() + 1` (P(k) = 2^-k) without a bit scan.
#[inline]
fn table_run_length(x: u32) -> i32 {
    let index = (x >> TABLE_INDEX_SHIFT) as usize;
    if (x & TABLE_THRESHOLD_MASK) < WEIGHT_POW2_32BIT[index] {
        32 - index as i32
    } else {
        i32::from(ALIAS_POW2_32BIT[index])
    }
}

/// Consumes words until one is non-zero, subtracting its trailing-zero count from `exponent`.
/// Each all-zero word costs 32; the result is clamped at 0.
#[inline]
fn exact_exponent<R: RandomSource + ?Sized>(rng: &mut R, mut exponent: i32) -> i32 {
    loop {
        let bits = rng.next_u32();
        if bits != 0 {
            return (exponent - bits.trailing_zeros() as i32).max(0);
        }
        exponent -= 32;
        if exponent < 0 {
            return 0;
        }
    }
}

#[inline]
fn compose(exponent: i32, mantissa: u32) -> f32 {
    f32::from_bits(((exponent as u32) << 23) | mantissa)
}

/// Exponent from the alias tables, mantissa from the low 23 bits of the next word.
///
/// A round-up out of the top binade would produce 1.0; that draw is thrown away and the whole
/// sample restarts.
pub fn sample_float_table<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    loop {
        // The table run length counts the terminating one bit, hence the extra step.
        let mut exponent = ONE_EXPONENT;
        loop {
            let x = rng.next_u32();
            if x != 0 {
                exponent = (exponent - table_run_length(x)).max(0);
                break;
            }
            exponent -= 32;
            if exponent < 0 {
                exponent = 0;
                break;
            }
        }

        let x = rng.next_u32();
        let mantissa = x & MANTISSA_MASK;
        if mantissa == 0 && (x & TOP_BIT) != 0 {
            if exponent >= MAX_EXPONENT {
                continue;
            }
            exponent += 1;
        }
        return compose(exponent, mantissa);
    }
}

/// Downey's method: trailing-zero count per word, mantissa from bits 8..=30 of the next word.
///
/// No restart: a round-up out of the top binade saturates at the 0.5 binade instead.
pub fn sample_float_exact<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    let exponent = exact_exponent(rng, MAX_EXPONENT);
    let u = rng.next_u32();
    finish(exponent, u)
}

/// Downey's method sharing one word between exponent and mantissa.
///
/// The low byte seeds the exponent; only when it is zero are more words drawn. Bits 8..=30 of the
/// same word give the mantissa and bit 31 the round-up.
pub fn sample_float_exact_fast<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    let u = rng.next_u32();
    let low = u & 0xFF;
    let exponent = if low == 0 {
        exact_exponent(rng, MAX_EXPONENT - 8)
    } else {
        MAX_EXPONENT - low.trailing_zeros() as i32
    };
    finish(exponent, u)
}

#[inline]
fn finish(mut exponent: i32, u: u32) -> f32 {
    let mantissa = (u >> 8) & MANTISSA_MASK;
    if mantissa == 0 && (u & TOP_BIT) != 0 {
        exponent = (exponent + 1).min(MAX_EXPONENT);
    }
    compose(exponent, mantissa)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FloatAlgorithm {
    Table,
    Exact,
    ExactFast,
}

impl FloatAlgorithm {
    pub const ALL: [FloatAlgorithm; 3] = [Self::Table, Self::Exact, Self::ExactFast];

    pub fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Exact => "exact",
            Self::ExactFast => "exact-fast",
        }
    }

    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> f32 {
        match self {
            Self::Table => sample_float_table(rng),
            Self::Exact => sample_float_exact(rng),
            Self::ExactFast => sample_float_exact_fast(rng),
        }
    }
}

impl fmt::Display for FloatAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FloatAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
