//! Stochastic action outcomes.

use gridworld_core::config::{validate_transition, TransitionConfig};
use gridworld_core::constants::{DEFAULT_INTENDED_PROBABILITY, DEFAULT_SLIP_PROBABILITY};
use gridworld_core::errors::ConfigError;
use gridworld_core::types::{Action, Coord, Grid};

/// Probabilities of moving as intended or slipping to either perpendicular.
///
/// The triple is validated on construction: non-negative, finite, sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionModel {
    intended: f64,
    slip_right: f64,
    slip_left: f64,
}

impl TransitionModel {
    pub fn new(intended: f64, slip_right: f64, slip_left: f64) -> Result<Self, ConfigError> {
        validate_transition(intended, slip_right, slip_left)?;
        Ok(Self {
            intended,
            slip_right,
            slip_left,
        })
    }

    pub fn from_config(config: &TransitionConfig) -> Result<Self, ConfigError> {
        let (intended, slip_right, slip_left) = config.effective_triple();
        Self::new(intended, slip_right, slip_left)
    }

    /// Every action succeeds.
    pub fn deterministic() -> Self {
        Self {
            intended: 1.0,
            slip_right: 0.0,
            slip_left: 0.0,
        }
    }

    pub fn intended(&self) -> f64 {
        self.intended
    }

    pub fn slip_right(&self) -> f64 {
        self.slip_right
    }

    pub fn slip_left(&self) -> f64 {
        self.slip_left
    }

    /// Directions actually taken when `action` is chosen, with probabilities.
    pub fn outcomes(&self, action: Action) -> [(Action, f64); 3] {
        [
            (action, self.intended),
            (action.clockwise(), self.slip_right),
            (action.counter_clockwise(), self.slip_left),
        ]
    }

    /// Successor cells reached from `from` under `action`, with probabilities.
    /// Walls and obstacles reflect, so a successor may be `from` itself.
    pub fn successors(&self, grid: &Grid, from: Coord, action: Action) -> [(Coord, f64); 3] {
        self.outcomes(action)
            .map(|(direction, p)| (grid.step(from, direction), p))
    }
}

impl Default for TransitionModel {
    fn default() -> Self {
        Self {
            intended: DEFAULT_INTENDED_PROBABILITY,
            slip_right: DEFAULT_SLIP_PROBABILITY,
            slip_left: DEFAULT_SLIP_PROBABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_pair_each_direction_with_its_perpendiculars() {
        let model = TransitionModel::default();
        let [(a, pa), (b, pb), (c, pc)] = model.outcomes(Action::Up);
        assert_eq!((a, b, c), (Action::Up, Action::Right, Action::Left));
        assert_eq!((pa, pb, pc), (0.8, 0.1, 0.1));

        let [(a, _), (b, _), (c, _)] = model.outcomes(Action::Right);
        assert_eq!((a, b, c), (Action::Right, Action::Down, Action::Up));
    }

    #[test]
    fn rejects_unnormalised_triple() {
        assert!(TransitionModel::new(0.8, 0.1, 0.2).is_err());
        assert!(TransitionModel::new(1.2, -0.1, -0.1).is_err());
        assert!(TransitionModel::new(f64::NAN, 0.5, 0.5).is_err());
        assert!(TransitionModel::new(0.6, 0.3, 0.1).is_ok());
    }
}
