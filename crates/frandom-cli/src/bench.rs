use std::hint::black_box;
use std::time::Instant;

use anyhow::{bail, Result};
use frandom_core::{derive_seed, unit_f32, FloatAlgorithm, Pcg32};

use crate::report::BenchResult;

/// Name of the 24-bit scaling baseline.
pub const BASELINE: &str = "unit";

/// Fills a buffer of `samples` floats from a fresh `Pcg32::with_seed(seed)` and times it.
pub fn measure<F>(name: &str, samples: usize, seed: u64, mut sample: F) -> BenchResult
where
    F: FnMut(&mut Pcg32) -> f32,
{
    let mut floats = vec![0.0f32; samples];
    let mut rng = Pcg32::with_seed(seed);

    let start = Instant::now();
    for slot in floats.iter_mut() {
        *slot = sample(&mut rng);
    }
    let elapsed = start.elapsed();

    let floats = black_box(floats);
    let mean = floats.iter().map(|&v| f64::from(v)).sum::<f64>() / samples.max(1) as f64;

    tracing::info!(name, millis = elapsed.as_millis() as u64, mean, "Measured");
    BenchResult {
        name: name.to_string(),
        millis: elapsed.as_millis(),
        mean,
    }
}

pub fn run(algorithms: &[FloatAlgorithm], samples: usize, seed: u64) -> Vec<BenchResult> {
    let mut results: Vec<BenchResult> = algorithms
        .iter()
        .map(|&alg| measure(alg.name(), samples, seed, |rng| alg.sample(rng)))
        .collect();
    results.push(measure(BASELINE, samples, seed, |rng| unit_f32(rng.next_u32())));
    results
}

/// Draws `samples` floats from each of `rounds` independent streams and fails on the first value
/// outside [0, 1).
pub fn check_range(
    algorithm: FloatAlgorithm,
    base_seed: u64,
    rounds: u64,
    samples: usize,
) -> Result<()> {
    for round in 0..rounds {
        let mut rng = Pcg32::with_seed(derive_seed(base_seed, round));
        tracing::debug!(%algorithm, round, "Checking stream");
        for i in 0..samples {
            let v = algorithm.sample(&mut rng);
            if !(0.0..1.0).contains(&v) {
                bail!("{algorithm} produced {v} (sample {i} of round {round})");
            }
        }
    }
    Ok(())
}
