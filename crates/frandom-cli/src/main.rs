//! frandom CLI - timing and inspection driver for `frandom-core`.
//!
//! - `frandom bench` - time the float generators against the 24-bit baseline
//! - `frandom alias` - print the alias table
//! - `frandom histogram` - sample the alias table and tabulate buckets
//! - `frandom check` - range-check a generator over many streams
//! - `frandom tables` - dump the 32-bucket lookup tables

mod bench;
mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use frandom_core::{AliasTable, FloatAlgorithm, Pcg32};

use config::DriverConfig;
use report::BenchReport;

#[derive(Parser)]
#[command(name = "frandom")]
#[command(about = "Full-resolution uniform float generator driver", version)]
struct Cli {
    /// Config file (defaults to ./frandom.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time each float algorithm
    Bench {
        /// Samples per algorithm
        #[arg(long)]
        samples: Option<usize>,

        /// Generator seed
        #[arg(long)]
        seed: Option<u64>,

        /// Algorithms to run (repeatable): table, exact, exact-fast
        #[arg(short, long = "algorithm")]
        algorithms: Vec<FloatAlgorithm>,

        /// Print a JSON report instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Print the alias table as markdown
    Alias {
        /// Number of buckets
        #[arg(long)]
        size: Option<u32>,
    },

    /// Sample the alias table and print bucket counts
    Histogram {
        /// Number of buckets
        #[arg(long)]
        size: Option<u32>,

        /// Number of draws
        #[arg(long, default_value_t = 1 << 24)]
        samples: u64,

        /// Generator seed
        #[arg(long)]
        seed: Option<u64>,

        /// Also write one count per line to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that every sample lies in [0, 1)
    Check {
        /// Independent streams
        #[arg(long)]
        rounds: Option<u64>,

        /// Samples per stream
        #[arg(long, default_value_t = 1_000_000)]
        samples: usize,

        /// Algorithms to check (repeatable)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<FloatAlgorithm>,
    },

    /// Write aliases.txt and weights.txt for the 32-bucket table
    Tables {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = DriverConfig::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Bench {
            samples,
            seed,
            algorithms,
            json,
        } => run_bench(&config, samples, seed, algorithms, json),
        Commands::Alias { size } => show_alias(size.unwrap_or(config.alias_size)),
        Commands::Histogram {
            size,
            samples,
            seed,
            output,
        } => run_histogram(
            size.unwrap_or(config.alias_size),
            samples,
            seed.unwrap_or(config.seed),
            output.as_deref(),
        ),
        Commands::Check {
            rounds,
            samples,
            algorithms,
        } => run_check(&config, rounds, samples, algorithms),
        Commands::Tables { output_dir } => write_tables(&output_dir),
    }
}

fn or_configured(algorithms: Vec<FloatAlgorithm>, config: &DriverConfig) -> Vec<FloatAlgorithm> {
    if algorithms.is_empty() {
        config.algorithms.clone()
    } else {
        algorithms
    }
}

fn run_bench(
    config: &DriverConfig,
    samples: Option<usize>,
    seed: Option<u64>,
    algorithms: Vec<FloatAlgorithm>,
    json: bool,
) -> Result<()> {
    let samples = samples.unwrap_or(config.samples);
    let seed = seed.unwrap_or(config.seed);
    let algorithms = or_configured(algorithms, config);
    tracing::info!(samples, seed, "Starting benchmark");

    let results = bench::run(&algorithms, samples, seed);

    if json {
        let report = BenchReport {
            timestamp: Utc::now(),
            seed,
            samples,
            results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for r in &results {
            println!("{}: {}", r.name, r.millis);
        }
    }
    Ok(())
}

fn build_table(size: u32) -> Result<AliasTable> {
    let table = AliasTable::try_build(size)?;
    if table.drain_deficit().abs() > 1 {
        tracing::warn!(size, deficit = table.drain_deficit(), "Alias table closed out of balance");
    }
    Ok(table)
}

fn show_alias(size: u32) -> Result<()> {
    let table = build_table(size)?;
    print!("{}", report::alias_markdown(&table));
    Ok(())
}

fn run_histogram(size: u32, samples: u64, seed: u64, output: Option<&Path>) -> Result<()> {
    let table = build_table(size)?;
    let mut rng = Pcg32::with_seed(seed);
    let histogram = report::alias_histogram(&table, &mut rng, samples);

    for (i, count) in histogram.iter().enumerate() {
        println!("[{i}] {count}");
    }

    if let Some(path) = output {
        report::write_histogram_csv(path, &histogram)?;
        tracing::info!(path = %path.display(), "Wrote histogram");
    }
    Ok(())
}

fn run_check(
    config: &DriverConfig,
    rounds: Option<u64>,
    samples: usize,
    algorithms: Vec<FloatAlgorithm>,
) -> Result<()> {
    let rounds = rounds.unwrap_or(config.check_rounds);
    for algorithm in or_configured(algorithms, config) {
        bench::check_range(algorithm, config.seed, rounds, samples)?;
        tracing::info!(%algorithm, rounds, samples, "Range check passed");
    }
    Ok(())
}

fn write_tables(dir: &Path) -> Result<()> {
    let table = build_table(AliasTable::MAX_SIZE)?;
    let (aliases, weights) = report::write_tables(dir, &table)?;
    tracing::info!(
        aliases = %aliases.display(),
        weights = %weights.display(),
        "Wrote lookup tables"
    );
    Ok(())
}
