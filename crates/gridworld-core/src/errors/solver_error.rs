//! Solver errors.

use super::error_code::{self, GridworldErrorCode};
use super::{ConfigError, GridError};

/// Errors that can occur while setting up or running a solve.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("did not converge within {sweeps} sweeps (last delta {delta:e})")]
    NotConverged { sweeps: u64, delta: f64 },
}

impl GridworldErrorCode for SolverError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Grid(e) => e.error_code(),
            Self::NotConverged { .. } => error_code::NOT_CONVERGED,
        }
    }
}
