//! Content errors.

use crate::validation::PoolViolation;
use thiserror::Error;

/// Intensity outside the 1..=5 scale.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntensityError {
    #[error("Intensity {0} is outside the 1..=5 scale")]
    OutOfRange(u8),
}

/// Errors raised while loading a content pool.
///
/// These are configuration errors found at load time. Selection itself
/// never fails once a pool exists.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Content pool failed validation: {}", join_violations(.0))]
    Invalid(Vec<PoolViolation>),

    #[error("Content pool could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join_violations(violations: &[PoolViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
