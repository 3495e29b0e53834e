//! Stochastic transition (slip) configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_INTENDED_PROBABILITY, DEFAULT_SLIP_PROBABILITY, PROBABILITY_SUM_TOLERANCE,
};
use crate::errors::ConfigError;

/// Outcome probabilities for a chosen action.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransitionConfig {
    /// Probability of moving in the intended direction. Default: 0.8.
    pub intended: Option<f64>,
    /// Probability of slipping to the right-hand perpendicular. Default: 0.1.
    pub slip_right: Option<f64>,
    /// Probability of slipping to the left-hand perpendicular. Default: 0.1.
    pub slip_left: Option<f64>,
}

impl TransitionConfig {
    pub fn effective_intended(&self) -> f64 {
        self.intended.unwrap_or(DEFAULT_INTENDED_PROBABILITY)
    }

    pub fn effective_slip_right(&self) -> f64 {
        self.slip_right.unwrap_or(DEFAULT_SLIP_PROBABILITY)
    }

    pub fn effective_slip_left(&self) -> f64 {
        self.slip_left.unwrap_or(DEFAULT_SLIP_PROBABILITY)
    }

    /// `(intended, slip_right, slip_left)` with defaults applied.
    pub fn effective_triple(&self) -> (f64, f64, f64) {
        (
            self.effective_intended(),
            self.effective_slip_right(),
            self.effective_slip_left(),
        )
    }
}

/// Reject probability triples that are negative, non-finite, or not normalised.
pub fn validate_transition(intended: f64, slip_right: f64, slip_left: f64) -> Result<(), ConfigError> {
    let parts = [intended, slip_right, slip_left];
    let in_range = parts.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p));
    let sum: f64 = parts.iter().sum();
    if !in_range || (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(ConfigError::InvalidTransition {
            intended,
            slip_right,
            slip_left,
        });
    }
    Ok(())
}
