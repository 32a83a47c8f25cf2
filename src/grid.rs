//! The N×N cell grid.
//!
//! Cells are stored flat in *shell order*: index `i` sits on shell
//! `d = floor(sqrt(i))`, and the positions within a shell alternate between
//! the shell's column `d` and row `d`, ending on the corner `(d, d)`. The
//! first `k²` cells therefore always cover the top-left `k×k` square, which is
//! what lets a resolution change simply truncate or append at the tail.
//!
//! Reconciliation is incremental: shrinking keeps the surviving cells' colour,
//! growing appends blank cells. A shrink-then-grow returns to N₁² cells with
//! only the inner square still painted.

use crate::color::{Color, Rgb};

pub const MIN_RESOLUTION: u32 = 1;
pub const MAX_RESOLUTION: u32 = 500;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// `None` until first painted: shows the page background.
    pub color: Option<Color>,
    /// Gridline border visible.
    pub bordered: bool,
}

/// Shell-order index -> zero-based (row, col).
pub fn shell_position(index: usize) -> (usize, usize) {
    let d = index.isqrt();
    let k = index - d * d;
    let j = k / 2;
    if index % 2 == 1 { (j, d) } else { (d, j) }
}

/// Zero-based (row, col) -> shell-order index. Inverse of `shell_position`.
pub fn shell_index(row: usize, col: usize) -> usize {
    let d = row.max(col);
    let base = d * d;
    if row == col {
        return base + 2 * d;
    }
    // Within a shell, index parity decides column-vs-row; the parity of the
    // offset k flips with the parity of d².
    let k = match (d % 2 == 0, col == d) {
        (true, true) => 2 * row + 1,
        (true, false) => 2 * col,
        (false, true) => 2 * row,
        (false, false) => 2 * col + 1,
    };
    base + k
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Unchanged,
    Shrunk { removed: usize },
    Grown { added: usize },
}

#[derive(Debug, Clone)]
pub struct Grid {
    resolution: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(resolution: u32) -> Self {
        let mut grid = Self { resolution: 0, cells: Vec::new() };
        grid.reconcile(resolution, false);
        grid
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.side() || col >= self.side() {
            return None;
        }
        self.cells.get(shell_index(row, col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row >= self.side() || col >= self.side() {
            return None;
        }
        self.cells.get_mut(shell_index(row, col))
    }

    pub fn cell_by_index_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// (row, col) of every cell, in storage order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.cells.len()).map(shell_position)
    }

    /// Bring the grid to `resolution`² cells. New cells inherit the current
    /// gridline state; removed cells come off the tail.
    pub fn reconcile(&mut self, resolution: u32, gridlines: bool) -> ReconcileOutcome {
        let resolution = resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION);
        let target = (resolution as usize).pow(2);
        let current = self.cells.len();
        self.resolution = resolution;

        if target < current {
            self.cells.truncate(target);
            ReconcileOutcome::Shrunk { removed: current - target }
        } else if target > current {
            self.cells.resize(target, Cell { color: None, bordered: gridlines });
            ReconcileOutcome::Grown { added: target - current }
        } else {
            ReconcileOutcome::Unchanged
        }
    }

    /// Reset button: every cell back to opaque white.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.color = Some(Color::opaque(Rgb::WHITE));
        }
    }

    pub fn set_borders(&mut self, bordered: bool) {
        for cell in &mut self.cells {
            cell.bordered = bordered;
        }
    }

    fn side(&self) -> usize {
        self.resolution as usize
    }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
