//! Observability for the solver.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
