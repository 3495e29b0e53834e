use serde::Serialize;

use super::ValueFunction;

/// Converged value function and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub values: ValueFunction,
    /// Full sweeps performed (policy-evaluation sweeps for policy iteration).
    pub sweeps: u64,
    /// Max per-cell change in the last sweep.
    pub final_delta: f64,
}
