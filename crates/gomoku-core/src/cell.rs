//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: usize = 64;

/// A cell on the board, addressed by zero-based row and column.
///
/// A `Cell` carries no board size. Whether it lies on a particular board is
/// checked by the board itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell from row and column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Cell { row, col }
    }

    /// Creates a cell from signed coordinates if both lie in `0..size`.
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Self> {
        let in_range = |v: i32| v >= 0 && (v as usize) < size && (v as usize) < MAX_BOARD_SIZE;
        if in_range(row) && in_range(col) {
            Some(Cell::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Returns the row.
    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column.
    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the row-major index on a board of the given size.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.row() * size + self.col()
    }

    /// Returns the cell `steps` steps away along `(d_row, d_col)`, or `None`
    /// if it falls off a board of the given size.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32, steps: i32, size: usize) -> Option<Self> {
        Cell::checked(
            self.row as i32 + d_row * steps,
            self.col as i32 + d_col * steps,
            size,
        )
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Cell::new(row, col)
    }
}
