//! Grid-world domain types.

pub mod action;
pub mod coord;
pub mod grid;
pub mod policy;
pub mod solution;
pub mod value;

pub use action::Action;
pub use coord::Coord;
pub use grid::{Cell, Grid, GridLayout, TerminalCell};
pub use policy::Policy;
pub use solution::Solution;
pub use value::ValueFunction;
