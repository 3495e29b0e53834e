//! Immutable grid of normal, obstacle, and terminal cells.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Action, Coord};
use crate::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::errors::GridError;

/// Kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reward", rename_all = "lowercase")]
pub enum Cell {
    /// Ordinary cell paying `reward` on every step taken from it.
    Normal(f64),
    /// Impassable cell. Moving into it leaves the agent where it was.
    Obstacle,
    /// Absorbing cell whose value is pinned to `reward`.
    Terminal(f64),
}

impl Cell {
    pub fn is_obstacle(&self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Cell::Terminal(_))
    }

    /// Immediate reward, or `None` for obstacles.
    pub fn reward(&self) -> Option<f64> {
        match *self {
            Cell::Normal(r) | Cell::Terminal(r) => Some(r),
            Cell::Obstacle => None,
        }
    }
}

/// A terminal cell declaration in a [`GridLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalCell {
    pub row: usize,
    pub col: usize,
    pub reward: f64,
}

impl TerminalCell {
    pub const fn new(row: usize, col: usize, reward: f64) -> Self {
        Self { row, col, reward }
    }

    pub fn at(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Shape of a grid independent of the base reward.
///
/// The base reward is applied to every cell the layout does not mark as an
/// obstacle or terminal, so one layout serves a whole reward sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub height: usize,
    pub width: usize,
    pub obstacles: Vec<Coord>,
    pub terminals: Vec<TerminalCell>,
}

impl GridLayout {
    /// The 4×5 layout of the classic exercise: obstacles at (1,1) and (2,2),
    /// +1 terminal at (1,4), −1 terminal at (2,3).
    pub fn classic() -> Self {
        Self {
            height: DEFAULT_GRID_HEIGHT,
            width: DEFAULT_GRID_WIDTH,
            obstacles: vec![Coord::new(1, 1), Coord::new(2, 2)],
            terminals: vec![TerminalCell::new(1, 4, 1.0), TerminalCell::new(2, 3, -1.0)],
        }
    }

    /// A layout with no obstacles and no terminals.
    pub fn open(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            obstacles: Vec::new(),
            terminals: Vec::new(),
        }
    }

    pub fn with_obstacle(mut self, at: Coord) -> Self {
        self.obstacles.push(at);
        self
    }

    pub fn with_terminal(mut self, at: Coord, reward: f64) -> Self {
        self.terminals.push(TerminalCell::new(at.row, at.col, reward));
        self
    }

    /// Check dimensions, bounds, duplicates, and terminal rewards.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.height == 0 || self.width == 0 {
            return Err(GridError::EmptyDimensions {
                height: self.height,
                width: self.width,
            });
        }

        let mut seen = HashSet::new();
        let declared = self
            .obstacles
            .iter()
            .map(|&at| ("obstacle", at))
            .chain(self.terminals.iter().map(|t| ("terminal", t.at())));
        for (kind, at) in declared {
            if at.row >= self.height || at.col >= self.width {
                return Err(GridError::OutOfBounds {
                    kind,
                    at,
                    height: self.height,
                    width: self.width,
                });
            }
            if !seen.insert(at) {
                return Err(GridError::DuplicateCell { at });
            }
        }

        for t in &self.terminals {
            if !t.reward.is_finite() {
                return Err(GridError::NonFiniteReward {
                    context: format!("terminal {}", t.at()),
                    reward: t.reward,
                });
            }
        }
        Ok(())
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::classic()
    }
}

/// Fixed-size `height × width` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from `layout`, filling unmarked cells with `base_reward`.
    pub fn from_layout(layout: &GridLayout, base_reward: f64) -> Result<Self, GridError> {
        layout.validate()?;
        if !base_reward.is_finite() {
            return Err(GridError::NonFiniteReward {
                context: "base reward".to_string(),
                reward: base_reward,
            });
        }

        let mut grid = Self {
            height: layout.height,
            width: layout.width,
            cells: vec![Cell::Normal(base_reward); layout.height * layout.width],
        };
        for &at in &layout.obstacles {
            let idx = grid.index(at);
            grid.cells[idx] = Cell::Obstacle;
        }
        for t in &layout.terminals {
            let idx = grid.index(t.at());
            grid.cells[idx] = Cell::Terminal(t.reward);
        }
        Ok(grid)
    }

    /// The classic 4×5 grid with the given base reward.
    pub fn classic(base_reward: f64) -> Result<Self, GridError> {
        Self::from_layout(&GridLayout::classic(), base_reward)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, obstacles included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.height && at.col < self.width
    }

    /// Cell at `at`. Panics if `at` is outside the grid.
    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    /// Cell at `at`, or `None` if outside the grid.
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.contains(at).then(|| self.cells[self.index(at)])
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }

    /// Where a single move from `from` in direction `action` lands.
    ///
    /// Moves off the edge clamp to the boundary row/column, and moves into an
    /// obstacle reflect back, so the agent stays at `from` in both cases.
    pub fn step(&self, from: Coord, action: Action) -> Coord {
        let (dr, dc) = action.offset();
        let row = clamp_step(from.row, dr, self.height);
        let col = clamp_step(from.col, dc, self.width);
        let target = Coord::new(row, col);
        if self.cell(target).is_obstacle() {
            from
        } else {
            target
        }
    }

    /// Reject a `height × width` companion array (values, policy) that does
    /// not line up with this grid.
    pub fn check_shape(
        &self,
        kind: &'static str,
        height: usize,
        width: usize,
    ) -> Result<(), GridError> {
        if (height, width) == (self.height, self.width) {
            return Ok(());
        }
        Err(GridError::ShapeMismatch {
            kind,
            height,
            width,
            grid_height: self.height,
            grid_width: self.width,
        })
    }

    pub(crate) fn index(&self, at: Coord) -> usize {
        at.row * self.width + at.col
    }
}

fn clamp_step(pos: usize, delta: isize, len: usize) -> usize {
    match delta {
        d if d < 0 => pos.saturating_sub(d.unsigned_abs()),
        d => (pos + d as usize).min(len - 1),
    }
}
