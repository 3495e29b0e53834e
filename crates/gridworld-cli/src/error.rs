use gridworld_core::errors::{ConfigError, GridworldErrorCode, SolverError};

const OUTPUT_ERROR: &str = "OUTPUT_ERROR";

/// Errors surfaced by the `gridworld` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Solver(#[from] SolverError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl GridworldErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Solver(e) => e.error_code(),
            Self::Output(_) => OUTPUT_ERROR,
        }
    }
}
