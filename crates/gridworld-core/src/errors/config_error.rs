//! Configuration errors.

use super::error_code::{self, GridworldErrorCode};
use super::GridError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error(
        "Transition probabilities must be non-negative and sum to 1: \
         intended={intended}, slip_right={slip_right}, slip_left={slip_left}"
    )]
    InvalidTransition {
        intended: f64,
        slip_right: f64,
        slip_left: f64,
    },

    #[error("Invalid grid layout: {0}")]
    InvalidGrid(#[from] GridError),
}

impl GridworldErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => error_code::INVALID_TRANSITION,
            Self::InvalidGrid(e) => e.error_code(),
            _ => error_code::CONFIG_ERROR,
        }
    }
}
