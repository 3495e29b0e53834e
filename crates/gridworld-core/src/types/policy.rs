use serde::Serialize;

use super::{Action, Cell, Coord, Grid};

/// One chosen action per cell. Obstacles and terminals hold `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    height: usize,
    width: usize,
    actions: Vec<Option<Action>>,
}

impl Policy {
    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            actions: vec![None; height * width],
        }
    }

    /// `action` in every normal cell of `grid`, `None` elsewhere.
    pub fn uniform(grid: &Grid, action: Action) -> Self {
        let mut policy = Self::empty(grid.height(), grid.width());
        for at in grid.coords() {
            if let Cell::Normal(_) = grid.cell(at) {
                policy.set(at, Some(action));
            }
        }
        policy
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, at: Coord) -> Option<Action> {
        self.actions[at.row * self.width + at.col]
    }

    pub fn set(&mut self, at: Coord, action: Option<Action>) {
        self.actions[at.row * self.width + at.col] = action;
    }

    /// Arrow table: `#` for obstacles, `T` for terminals.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            let line: String = (0..self.width)
                .map(|col| {
                    let at = Coord::new(row, col);
                    match (grid.cell(at), self.get(at)) {
                        (Cell::Obstacle, _) => '#',
                        (Cell::Terminal(_), _) => 'T',
                        (_, Some(action)) => action.arrow(),
                        (_, None) => '.',
                    }
                })
                .flat_map(|c| [c, ' '])
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
