//! Rendering and file output for the driver.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use frandom_core::{AliasTable, RandomSource};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub millis: u128,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub timestamp: DateTime<Utc>,
    pub seed: u64,
    pub samples: usize,
    pub results: Vec<BenchResult>,
}

/// `| i | alias | weight |` rows, one per bucket.
pub fn alias_markdown(table: &AliasTable) -> String {
    let mut out = String::from("| index | alias | weight |\n| ---: | ---: | ---: |\n");
    for i in 0..table.size() {
        let _ = writeln!(out, "| {} | {} | {} |", i, table.alias(i), table.weight(i));
    }
    out
}

pub fn alias_histogram<R: RandomSource + ?Sized>(
    table: &AliasTable,
    rng: &mut R,
    samples: u64,
) -> Vec<u64> {
    let mut histogram = vec![0u64; table.size() as usize];
    for _ in 0..samples {
        histogram[table.sample(rng) as usize] += 1;
    }
    histogram
}

/// One count per line.
pub fn write_histogram_csv(path: &Path, histogram: &[u64]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for count in histogram {
        writeln!(writer, "{count}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `aliases.txt` and `weights.txt` (`value,` per line) into `dir`.
pub fn write_tables(dir: &Path, table: &AliasTable) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let aliases = dir.join("aliases.txt");
    let weights = dir.join("weights.txt");
    write_column(&aliases, table.aliases())?;
    write_column(&weights, table.weights())?;
    Ok((aliases, weights))
}

fn write_column(path: &Path, values: &[u32]) -> Result<()> {
    let mut out = String::new();
    for v in values {
        let _ = writeln!(out, "{v},");
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
}
