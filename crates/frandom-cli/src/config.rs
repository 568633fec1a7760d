//! Driver configuration, loaded from `frandom.yaml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use frandom_core::{AliasTable, FloatAlgorithm, Pcg32};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "frandom.yaml";

/// Defaults for every subcommand. Command-line flags win over these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Seed for the benchmark / histogram generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Samples per benchmark run
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Number of alias table buckets
    #[serde(default = "default_alias_size")]
    pub alias_size: u32,

    /// Float algorithms to run
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<FloatAlgorithm>,

    /// Independent streams for the range check
    #[serde(default = "default_check_rounds")]
    pub check_rounds: u64,
}

fn default_seed() -> u64 {
    Pcg32::DEFAULT_SEED
}
fn default_samples() -> usize {
    100_000_000
}
fn default_alias_size() -> u32 {
    AliasTable::MAX_SIZE
}
fn default_algorithms() -> Vec<FloatAlgorithm> {
    FloatAlgorithm::ALL.to_vec()
}
fn default_check_rounds() -> u64 {
    100
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            samples: default_samples(),
            alias_size: default_alias_size(),
            algorithms: default_algorithms(),
            check_rounds: default_check_rounds(),
        }
    }
}

impl DriverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Uses `explicit` if given, otherwise `frandom.yaml` under `dir` when it exists, otherwise
    /// defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        AliasTable::try_build(self.alias_size).context("Invalid alias_size")?;
        anyhow::ensure!(self.samples > 0, "samples must be positive");
        anyhow::ensure!(!self.algorithms.is_empty(), "algorithms must not be empty");
        Ok(())
    }
}
