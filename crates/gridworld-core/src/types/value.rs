//! Dense value function over a grid.

use std::fmt;

use serde::Serialize;

use super::{Cell, Coord, Grid};

/// One `f64` per cell, row-major. Obstacle entries are unused and stay `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueFunction {
    height: usize,
    width: usize,
    values: Vec<f64>,
}

impl ValueFunction {
    /// All-zero value function of the given shape.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            values: vec![0.0; height * width],
        }
    }

    /// All-zero value function shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::zeros(grid.height(), grid.width())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, at: Coord) -> f64 {
        self.values[at.row * self.width + at.col]
    }

    pub fn set(&mut self, at: Coord, value: f64) {
        self.values[at.row * self.width + at.col] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.width.max(1))
    }

    /// Largest absolute per-cell difference.
    ///
    /// # Panics
    ///
    /// Panics if the two value functions differ in shape.
    pub fn max_abs_diff(&self, other: &ValueFunction) -> f64 {
        assert_eq!(
            (self.height, self.width),
            (other.height, other.width),
            "value functions differ in shape"
        );
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Table with obstacles rendered as `#`.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            let line: Vec<String> = (0..self.width)
                .map(|col| {
                    let at = Coord::new(row, col);
                    match grid.cell(at) {
                        Cell::Obstacle => format!("{:>9}", "#"),
                        _ => format!("{:>9.4}", self.get(at)),
                    }
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for ValueFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|v| format!("{v:>9.4}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
