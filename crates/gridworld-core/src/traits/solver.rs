use crate::errors::SolverError;
use crate::types::{Grid, Solution};

/// Computes the optimal value function of a grid-world MDP.
pub trait MdpSolver {
    fn solve(&self, grid: &Grid) -> Result<Solution, SolverError>;
}
