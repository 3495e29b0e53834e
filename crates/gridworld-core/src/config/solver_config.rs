//! Solver configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DISCOUNT, DEFAULT_EPSILON};
use crate::errors::ConfigError;

/// Which dynamic-programming method to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMethod {
    #[default]
    Value,
    Policy,
}

impl FromStr for SolveMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" | "value-iteration" => Ok(Self::Value),
            "policy" | "policy-iteration" => Ok(Self::Policy),
            other => Err(ConfigError::ValidationFailed {
                field: "solver.method".to_string(),
                message: format!("unknown method '{other}', expected 'value' or 'policy'"),
            }),
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::Policy => f.write_str("policy"),
        }
    }
}

/// Configuration for the iterative solve.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SolverConfig {
    /// Discount factor γ, must lie in `[0, 1)`. Default: 0.9.
    pub discount: Option<f64>,
    /// Per-cell convergence threshold ε. Default: 1e-4.
    pub epsilon: Option<f64>,
    /// Upper bound on sweeps. Default: unbounded.
    pub max_sweeps: Option<u64>,
    /// Solve method. Default: value iteration.
    pub method: Option<SolveMethod>,
}

impl SolverConfig {
    /// Returns the effective discount factor, defaulting to 0.9.
    pub fn effective_discount(&self) -> f64 {
        self.discount.unwrap_or(DEFAULT_DISCOUNT)
    }

    /// Returns the effective convergence threshold, defaulting to 1e-4.
    pub fn effective_epsilon(&self) -> f64 {
        self.epsilon.unwrap_or(DEFAULT_EPSILON)
    }

    /// Returns the effective method, defaulting to value iteration.
    pub fn effective_method(&self) -> SolveMethod {
        self.method.unwrap_or_default()
    }
}

/// γ must be finite and in `[0, 1)` so the Bellman operator contracts.
pub fn validate_discount(discount: f64) -> Result<(), ConfigError> {
    if !discount.is_finite() || !(0.0..1.0).contains(&discount) {
        return Err(ConfigError::ValidationFailed {
            field: "solver.discount".to_string(),
            message: format!("must be in [0.0, 1.0), got {discount}"),
        });
    }
    Ok(())
}

/// ε must be finite and strictly positive.
pub fn validate_epsilon(epsilon: f64) -> Result<(), ConfigError> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(ConfigError::ValidationFailed {
            field: "solver.epsilon".to_string(),
            message: format!("must be finite and greater than 0, got {epsilon}"),
        });
    }
    Ok(())
}
