use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias table size must be a power of two in 1..=32, got {0}")]
    InvalidSize(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown float algorithm `{0}` (expected one of: table, exact, exact-fast)")]
pub struct ParseAlgorithmError(pub String);
