//! Greedy policy extraction.

use gridworld_core::types::{Cell, Grid, Policy, ValueFunction};

use crate::bellman;
use crate::transition::TransitionModel;

/// Best action per normal cell with respect to `values`.
/// Obstacles and terminals are left without an action.
pub fn greedy_policy(grid: &Grid, values: &ValueFunction, model: &TransitionModel) -> Policy {
    let mut policy = Policy::empty(grid.height(), grid.width());
    for at in grid.coords() {
        if let Cell::Normal(_) = grid.cell(at) {
            let (action, _) = bellman::best_action(grid, values, model, at);
            policy.set(at, Some(action));
        }
    }
    policy
}
