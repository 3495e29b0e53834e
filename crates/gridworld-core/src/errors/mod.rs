//! Error handling for the solver.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod grid_error;
pub mod solver_error;

pub use config_error::ConfigError;
pub use error_code::GridworldErrorCode;
pub use grid_error::GridError;
pub use solver_error::SolverError;
