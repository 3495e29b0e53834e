//! Grid construction errors.

use super::error_code::{self, GridworldErrorCode};
use crate::types::Coord;

/// Errors raised while building a [`Grid`](crate::types::Grid).
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {height}x{width}")]
    EmptyDimensions { height: usize, width: usize },

    #[error("{kind} cell {at} lies outside the {height}x{width} grid")]
    OutOfBounds {
        kind: &'static str,
        at: Coord,
        height: usize,
        width: usize,
    },

    #[error("cell {at} is declared more than once")]
    DuplicateCell { at: Coord },

    #[error("reward for {context} must be finite, got {reward}")]
    NonFiniteReward { context: String, reward: f64 },

    #[error("{kind} is {height}x{width} but the grid is {grid_height}x{grid_width}")]
    ShapeMismatch {
        kind: &'static str,
        height: usize,
        width: usize,
        grid_height: usize,
        grid_width: usize,
    },
}

impl GridworldErrorCode for GridError {
    fn error_code(&self) -> &'static str {
        error_code::GRID_ERROR
    }
}
