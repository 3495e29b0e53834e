//! Policy iteration: alternate policy evaluation and greedy improvement.

use gridworld_core::config::{validate_discount, validate_epsilon, GridworldConfig};
use gridworld_core::constants::POLICY_IMPROVEMENT_MARGIN;
use gridworld_core::errors::{ConfigError, SolverError};
use gridworld_core::tracing::spans::names;
use gridworld_core::traits::MdpSolver;
use gridworld_core::types::{Action, Cell, Coord, Grid, Policy, Solution, ValueFunction};

use crate::bellman;
use crate::transition::TransitionModel;

/// Result of a policy-iteration run.
#[derive(Debug, Clone)]
pub struct PolicyIterationOutcome {
    /// Value of the final policy. `sweeps` counts evaluation sweeps across all rounds.
    pub solution: Solution,
    pub policy: Policy,
    /// Evaluate-then-improve rounds, including the final stable one.
    pub rounds: u64,
}

/// Policy iteration solver.
///
/// Starts from `Up` in every normal cell. Evaluation runs synchronous sweeps
/// under the fixed policy until the largest per-cell change is at most
/// `epsilon`. Improvement switches a cell's action only when the greedy
/// action is strictly better, and the run ends once no cell switches.
#[derive(Debug, Clone)]
pub struct PolicyIteration {
    discount: f64,
    epsilon: f64,
    max_sweeps: Option<u64>,
    model: TransitionModel,
}

impl PolicyIteration {
    pub fn new(discount: f64, epsilon: f64, model: TransitionModel) -> Result<Self, ConfigError> {
        validate_discount(discount)?;
        validate_epsilon(epsilon)?;
        Ok(Self {
            discount,
            epsilon,
            max_sweeps: None,
            model,
        })
    }

    pub fn from_config(config: &GridworldConfig) -> Result<Self, ConfigError> {
        let model = TransitionModel::from_config(&config.transition)?;
        let solver = Self::new(
            config.solver.effective_discount(),
            config.solver.effective_epsilon(),
            model,
        )?;
        Ok(match config.solver.max_sweeps {
            Some(max) => solver.with_max_sweeps(max),
            None => solver,
        })
    }

    /// Bound each policy evaluation to `max` sweeps.
    pub fn with_max_sweeps(mut self, max: u64) -> Self {
        self.max_sweeps = Some(max);
        self
    }

    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// Evaluate `policy` starting from `values`.
    ///
    /// Normal cells without an assigned action are evaluated as `Up`.
    /// Returns the value function, sweeps used, and the final delta.
    /// `policy` and `values` must be shaped like `grid`.
    pub fn evaluate(
        &self,
        grid: &Grid,
        policy: &Policy,
        mut values: ValueFunction,
    ) -> Result<(ValueFunction, u64, f64), SolverError> {
        grid.check_shape("policy", policy.height(), policy.width())?;
        grid.check_shape("value function", values.height(), values.width())?;
        let mut sweeps = 0u64;
        loop {
            let mut next = values.clone();
            let mut delta = 0.0_f64;
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    let at = Coord::new(row, col);
                    let updated = match grid.cell(at) {
                        Cell::Obstacle => continue,
                        Cell::Terminal(reward) => reward,
                        Cell::Normal(reward) => {
                            let action = policy.get(at).unwrap_or(Action::Up);
                            let q = bellman::q_value(grid, &values, &self.model, at, action);
                            reward + self.discount * q
                        }
                    };
                    delta = delta.max((updated - values.get(at)).abs());
                    next.set(at, updated);
                }
            }
            values = next;
            sweeps += 1;

            if delta <= self.epsilon {
                return Ok((values, sweeps, delta));
            }
            if let Some(max) = self.max_sweeps {
                if sweeps >= max {
                    return Err(SolverError::NotConverged { sweeps, delta });
                }
            }
        }
    }

    /// Make `policy` greedy with respect to `values`. Returns `true` when no
    /// cell changed its action.
    pub fn improve(&self, grid: &Grid, values: &ValueFunction, policy: &mut Policy) -> bool {
        let mut stable = true;
        for at in grid.coords() {
            if !matches!(grid.cell(at), Cell::Normal(_)) {
                continue;
            }
            let current = policy.get(at).unwrap_or(Action::Up);
            let current_q = bellman::q_value(grid, values, &self.model, at, current);
            let (best, best_q) = bellman::best_action(grid, values, &self.model, at);
            if best_q > current_q + POLICY_IMPROVEMENT_MARGIN {
                policy.set(at, Some(best));
                stable = false;
            } else {
                policy.set(at, Some(current));
            }
        }
        stable
    }

    /// Run evaluate/improve rounds until the policy is stable.
    pub fn run(&self, grid: &Grid) -> Result<PolicyIterationOutcome, SolverError> {
        let span = tracing::info_span!(
            names::POLICY_ITERATION,
            height = grid.height(),
            width = grid.width(),
            discount = self.discount,
            epsilon = self.epsilon
        );
        let _guard = span.enter();

        let mut policy = Policy::uniform(grid, Action::Up);
        let mut values = ValueFunction::for_grid(grid);
        let mut total_sweeps = 0u64;
        let mut rounds = 0u64;
        loop {
            let (evaluated, sweeps, delta) = self.evaluate(grid, &policy, values)?;
            values = evaluated;
            total_sweeps += sweeps;
            rounds += 1;
            tracing::trace!(round = rounds, sweeps, delta, "policy evaluated");

            if self.improve(grid, &values, &mut policy) {
                tracing::debug!(rounds, sweeps = total_sweeps, "policy iteration converged");
                return Ok(PolicyIterationOutcome {
                    solution: Solution {
                        values,
                        sweeps: total_sweeps,
                        final_delta: delta,
                    },
                    policy,
                    rounds,
                });
            }
        }
    }
}

impl MdpSolver for PolicyIteration {
    fn solve(&self, grid: &Grid) -> Result<Solution, SolverError> {
        self.run(grid).map(|outcome| outcome.solution)
    }
}
