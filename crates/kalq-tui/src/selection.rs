//! Button-grid selection cursor.
//!
//! One implementation of the wrap/clamp rules serves every mode's grid:
//! Up/Down clamp at the edges, Left/Right wrap across row boundaries, and
//! `clamp` re-establishes the invariant after the grid changes shape.

use kalq_core::modes::Grid;

/// (row, col) into the active button grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub row: usize,
    pub col: usize,
}

impl Selection {
    /// The label under the selection.
    ///
    /// The invariant guarantees the indices are in bounds for the grid the
    /// selection was last clamped against.
    pub fn label(self, grid: Grid) -> &'static str {
        grid[self.row][self.col]
    }

    pub fn move_up(&mut self, grid: Grid) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(grid[self.row].len() - 1);
        }
    }

    pub fn move_down(&mut self, grid: Grid) {
        if self.row + 1 < grid.len() {
            self.row += 1;
            self.col = self.col.min(grid[self.row].len() - 1);
        }
    }

    /// Left wraps to the end of the previous row when one exists.
    pub fn move_left(&mut self, grid: Grid) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = grid[self.row].len() - 1;
        }
    }

    /// Right wraps to the start of the next row when one exists.
    pub fn move_right(&mut self, grid: Grid) {
        if self.col + 1 < grid[self.row].len() {
            self.col += 1;
        } else if self.row + 1 < grid.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Re-clamps into bounds after a grid change.
    pub fn clamp(&mut self, grid: Grid) {
        self.row = self.row.min(grid.len() - 1);
        self.col = self.col.min(grid[self.row].len() - 1);
    }
}
