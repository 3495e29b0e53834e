//! Single-state Bellman backups.

use gridworld_core::types::{Action, Coord, Grid, ValueFunction};

use crate::transition::TransitionModel;

/// Expected successor value of taking `action` at `at`:
/// `p_intended·V(s₁) + p_right·V(s₂) + p_left·V(s₃)`.
pub fn q_value(
    grid: &Grid,
    values: &ValueFunction,
    model: &TransitionModel,
    at: Coord,
    action: Action,
) -> f64 {
    model
        .successors(grid, at, action)
        .iter()
        .map(|&(next, p)| p * values.get(next))
        .sum()
}

/// Action with the highest expected successor value, and that value.
/// Exact ties go to the earliest action in [`Action::ALL`].
pub fn best_action(
    grid: &Grid,
    values: &ValueFunction,
    model: &TransitionModel,
    at: Coord,
) -> (Action, f64) {
    let mut best = (Action::ALL[0], f64::NEG_INFINITY);
    for action in Action::ALL {
        let q = q_value(grid, values, model, at, action);
        if q > best.1 {
            best = (action, q);
        }
    }
    best
}
