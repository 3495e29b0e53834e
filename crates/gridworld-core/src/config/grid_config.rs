//! Grid layout configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::types::{Coord, GridLayout, TerminalCell};

/// Grid shape and special cells. Unset fields fall back to the classic layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridConfig {
    /// Rows. Default: 4.
    pub height: Option<usize>,
    /// Columns. Default: 5.
    pub width: Option<usize>,
    /// Obstacle cells as `[row, col]` pairs. Default: (1,1) and (2,2).
    pub obstacles: Option<Vec<[usize; 2]>>,
    /// Terminal cells. Default: +1 at (1,4), −1 at (2,3).
    pub terminals: Option<Vec<TerminalCell>>,
}

impl GridConfig {
    pub fn effective_height(&self) -> usize {
        self.height.unwrap_or(DEFAULT_GRID_HEIGHT)
    }

    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_GRID_WIDTH)
    }

    /// Build the layout described by this config. Not yet validated.
    pub fn layout(&self) -> GridLayout {
        let classic = GridLayout::classic();
        GridLayout {
            height: self.effective_height(),
            width: self.effective_width(),
            obstacles: match &self.obstacles {
                Some(cells) => cells.iter().map(|&c| Coord::from(c)).collect(),
                None => classic.obstacles,
            },
            terminals: self.terminals.clone().unwrap_or(classic.terminals),
        }
    }
}
