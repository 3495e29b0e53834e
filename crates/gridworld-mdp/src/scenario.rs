//! Reward-scenario sweep.
//!
//! Each base reward gets a fresh grid and a fresh solve; nothing carries
//! over between scenarios.

use gridworld_core::config::{GridworldConfig, SolveMethod};
use gridworld_core::errors::SolverError;
use gridworld_core::tracing::spans::names;
use gridworld_core::types::{Grid, Policy, Solution};
use serde::Serialize;

use crate::policy_iteration::PolicyIteration;
use crate::value_iteration::ValueIteration;

/// Outcome of solving one base-reward scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub base_reward: f64,
    pub method: SolveMethod,
    pub grid: Grid,
    pub solution: Solution,
    /// Greedy policy for the solved values.
    pub policy: Policy,
}

/// Solve a single scenario with the configured layout, model, and method.
pub fn run_scenario(config: &GridworldConfig, base_reward: f64) -> Result<ScenarioReport, SolverError> {
    let span = tracing::info_span!(names::SCENARIO, base_reward);
    let _guard = span.enter();

    GridworldConfig::validate(config)?;
    let grid = Grid::from_layout(&config.grid.layout(), base_reward)?;
    let method = config.solver.effective_method();

    let (solution, policy) = match method {
        SolveMethod::Value => {
            let solver = ValueIteration::from_config(config)?;
            let solution = solver.solve(&grid)?;
            let policy = solver.policy(&grid, &solution.values);
            (solution, policy)
        }
        SolveMethod::Policy => {
            let outcome = PolicyIteration::from_config(config)?.run(&grid)?;
            (outcome.solution, outcome.policy)
        }
    };

    tracing::info!(
        %method,
        sweeps = solution.sweeps,
        final_delta = solution.final_delta,
        "scenario solved"
    );

    Ok(ScenarioReport {
        base_reward,
        method,
        grid,
        solution,
        policy,
    })
}

/// Solve every reward in order. Stops at the first failure.
pub fn run_scenarios(
    config: &GridworldConfig,
    rewards: &[f64],
) -> Result<Vec<ScenarioReport>, SolverError> {
    rewards
        .iter()
        .map(|&reward| run_scenario(config, reward))
        .collect()
}
