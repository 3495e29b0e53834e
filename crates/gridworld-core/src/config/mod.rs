//! Configuration system for the solver.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod grid_config;
pub mod gridworld_config;
pub mod scenario_config;
pub mod solver_config;
pub mod transition_config;

pub use grid_config::GridConfig;
pub use gridworld_config::{CliOverrides, GridworldConfig};
pub use scenario_config::ScenarioConfig;
pub use solver_config::{validate_discount, validate_epsilon, SolveMethod, SolverConfig};
pub use transition_config::{validate_transition, TransitionConfig};
