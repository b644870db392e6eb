//! Error types for convention verification.
//!
//! Only setup and configuration problems are errors. A convention that does
//! not hold for a unit is reported as a failing [`CheckResult`](crate::CheckResult).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a verification run.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A referenced file or directory is missing or unreadable.
    #[error("setup error: cannot read {}: {reason}", path.display())]
    Setup { path: PathBuf, reason: String },

    /// Discovery found no units after skip-set exclusion.
    #[error("setup error: no units discovered in {}", dir.display())]
    NoUnits { dir: PathBuf },

    /// Unknown filter value or a predicate the active layout does not run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl VerifyError {
    pub(crate) fn setup(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Setup {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Whether the error comes from the inspected tree rather than from
    /// configuration.
    pub fn is_setup(&self) -> bool {
        matches!(self, Self::Setup { .. } | Self::NoUnits { .. })
    }
}

/// Convenience result type for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;
