//! # gridworld-core
//!
//! Foundation crate for the grid-world MDP solver.
//! Defines the grid, action, value and policy types, plus errors, config,
//! tracing setup, and constants. The solver crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::GridworldConfig;
pub use errors::{ConfigError, GridError, GridworldErrorCode, SolverError};
pub use traits::MdpSolver;
pub use types::{Action, Cell, Coord, Grid, GridLayout, Policy, Solution, ValueFunction};
