//! Reward scenario configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REWARD_SCENARIOS;

/// Base rewards to sweep, each solved independently.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Default: `[-2.0, 0.1, 0.02, 1.0]`.
    pub rewards: Option<Vec<f64>>,
}

impl ScenarioConfig {
    pub fn effective_rewards(&self) -> Vec<f64> {
        self.rewards
            .clone()
            .unwrap_or_else(|| DEFAULT_REWARD_SCENARIOS.to_vec())
    }
}
