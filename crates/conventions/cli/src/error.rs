//! CLI error types

use conventions_verifier::VerifyError;
use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} check(s) failed")]
    ChecksFailed(usize),
}

impl CliError {
    /// Process exit status: 1 for convention failures, 2 for everything that
    /// kept the battery from running.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ChecksFailed(_) => 1,
            _ => 2,
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::ChecksFailed(3).exit_code(), 1);
        let setup = CliError::Verify(VerifyError::NoUnits {
            dir: "src/algorithms".into(),
        });
        assert_eq!(setup.exit_code(), 2);
        assert!(setup.to_string().contains("src/algorithms"));
    }
}
