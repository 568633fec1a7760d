//! Uniform single-precision floats in [0, 1) with full mantissa resolution, assembled from cheap
//! 32-bit PCG draws.
//!
//! - [`Pcg32`] is the stream generator, seeded through [`SplitMix64`].
//! - [`AliasTable`] samples the power-of-two distribution the table-driven exponent relies on.
//! - [`sample_float_table`], [`sample_float_exact`] and [`sample_float_exact_fast`] are three
//!   interchangeable ways to build the float; [`FloatAlgorithm`] selects one at runtime.
//!
//! Nothing here is cryptographic, and each generator instance is meant to be owned by one thread.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod alias;
pub mod error;
pub mod float;
pub mod pcg;
pub mod rng;

pub use alias::AliasTable;
pub use error::{AliasError, ParseAlgorithmError};
pub use float::{
    sample_float_exact, sample_float_exact_fast, sample_float_table, FloatAlgorithm,
    ALIAS_POW2_32BIT, WEIGHT_POW2_32BIT,
};
pub use pcg::Pcg32;
pub use rng::{derive_seed, mix64, unit_f32, unit_f64, RandomSource, SplitMix64};
