//! Synchronous value iteration.

use gridworld_core::config::{validate_discount, validate_epsilon, GridworldConfig};
use gridworld_core::constants::{DEFAULT_DISCOUNT, DEFAULT_EPSILON};
use gridworld_core::errors::{ConfigError, GridError, SolverError};
use gridworld_core::tracing::spans::names;
use gridworld_core::traits::MdpSolver;
use gridworld_core::types::{Cell, Coord, Grid, Policy, Solution, ValueFunction};

use crate::bellman;
use crate::policy;
use crate::transition::TransitionModel;

/// Value iteration solver.
///
/// Each sweep applies the Bellman optimality update to every normal cell,
/// pins terminals to their reward, and skips obstacles. Sweeps read only
/// the previous sweep's values. Iteration stops once the largest per-cell
/// change in a sweep is at most `epsilon`.
#[derive(Debug, Clone)]
pub struct ValueIteration {
    discount: f64,
    epsilon: f64,
    max_sweeps: Option<u64>,
    model: TransitionModel,
}

impl ValueIteration {
    /// Create a solver. Rejects γ outside `[0, 1)` and non-positive ε.
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

    /// Create a solver from the resolved configuration.
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

    /// Give up with [`SolverError::NotConverged`] after `max` sweeps.
    pub fn with_max_sweeps(mut self, max: u64) -> Self {
        self.max_sweeps = Some(max);
        self
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn max_sweeps(&self) -> Option<u64> {
        self.max_sweeps
    }

    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// One full Bellman sweep over `values`.
    ///
    /// Returns the new value function and the largest absolute per-cell change.
    /// Fails with [`GridError::ShapeMismatch`] when `values` is not shaped like `grid`.
    pub fn sweep(
        &self,
        grid: &Grid,
        values: &ValueFunction,
    ) -> Result<(ValueFunction, f64), GridError> {
        grid.check_shape("value function", values.height(), values.width())?;
        let mut next = values.clone();
        let mut delta = 0.0_f64;

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let at = Coord::new(row, col);
                let updated = match grid.cell(at) {
                    Cell::Obstacle => continue,
                    Cell::Terminal(reward) => reward,
                    Cell::Normal(reward) => {
                        let (_, best) = bellman::best_action(grid, values, &self.model, at);
                        reward + self.discount * best
                    }
                };
                delta = delta.max((updated - values.get(at)).abs());
                next.set(at, updated);
            }
        }

        Ok((next, delta))
    }

    /// Iterate from an all-zero value function until convergence.
    pub fn solve(&self, grid: &Grid) -> Result<Solution, SolverError> {
        let span = tracing::info_span!(
            names::SOLVE,
            height = grid.height(),
            width = grid.width(),
            discount = self.discount,
            epsilon = self.epsilon
        );
        let _guard = span.enter();

        let mut values = ValueFunction::for_grid(grid);
        let mut sweeps = 0u64;
        loop {
            let (next, delta) = self.sweep(grid, &values)?;
            values = next;
            sweeps += 1;
            tracing::trace!(sweep = sweeps, delta, "value sweep");

            if delta <= self.epsilon {
                tracing::debug!(sweeps, final_delta = delta, "value iteration converged");
                return Ok(Solution {
                    values,
                    sweeps,
                    final_delta: delta,
                });
            }
            if let Some(max) = self.max_sweeps {
                if sweeps >= max {
                    tracing::warn!(sweeps, delta, "value iteration hit the sweep limit");
                    return Err(SolverError::NotConverged { sweeps, delta });
                }
            }
        }
    }

    /// Change produced by one more sweep from `values`.
    /// At most `epsilon` for any value function returned by [`solve`](Self::solve).
    pub fn residual(&self, grid: &Grid, values: &ValueFunction) -> Result<f64, GridError> {
        self.sweep(grid, values).map(|(_, delta)| delta)
    }

    /// Greedy policy with respect to `values` under this solver's model.
    pub fn policy(&self, grid: &Grid, values: &ValueFunction) -> Policy {
        policy::greedy_policy(grid, values, &self.model)
    }
}

impl Default for ValueIteration {
    fn default() -> Self {
        Self {
            discount: DEFAULT_DISCOUNT,
            epsilon: DEFAULT_EPSILON,
            max_sweeps: None,
            model: TransitionModel::default(),
        }
    }
}

impl MdpSolver for ValueIteration {
    fn solve(&self, grid: &Grid) -> Result<Solution, SolverError> {
        ValueIteration::solve(self, grid)
    }
}
