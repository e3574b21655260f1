//! Win detection by scanning lines through a single cell.
//!
//! Only lines through the most recent stone can have changed, so the scan is
//! bounded by four orientations times the run length, whatever the board size.

use gomoku_core::{Cell, Stone};

use crate::config::WIN_LENGTH;
use crate::Board;

/// One of the four line directions checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Orientation {
    /// All orientations, in scan order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Returns the positive step as `(d_row, d_col)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }
}

/// Returns the maximal run of `stone` through `cell` along `orientation`.
///
/// The run is ordered from its negative-direction end to its positive-direction
/// end and includes `cell`. It is empty if `cell` is off the board or does not
/// hold `stone`.
pub fn run_through(board: &Board, cell: Cell, stone: Stone, orientation: Orientation) -> Vec<Cell> {
    if board.stone_at(cell) != Some(stone) {
        return Vec::new();
    }

    let (d_row, d_col) = orientation.delta();
    let size = board.size();
    let matches = |c: &Cell| board.stone_at(*c) == Some(stone);

    let backward = (1..)
        .map_while(|step| cell.offset(d_row, d_col, -step, size))
        .take_while(matches)
        .count() as i32;

    (-backward..)
        .map_while(|step| cell.offset(d_row, d_col, step, size))
        .take_while(matches)
        .collect()
}

/// Returns the winning line through `cell` for `stone`, or an empty vector.
///
/// Orientations are tried in [`Orientation::ALL`] order and the first run of
/// at least five stones is returned in full.
pub fn scan_win(board: &Board, cell: Cell, stone: Stone) -> Vec<Cell> {
    scan_for_run(board, cell, stone, WIN_LENGTH)
}

pub(crate) fn scan_for_run(board: &Board, cell: Cell, stone: Stone, min_len: usize) -> Vec<Cell> {
    Orientation::ALL
        .into_iter()
        .map(|orientation| run_through(board, cell, stone, orientation))
        .find(|run| run.len() >= min_len)
        .unwrap_or_default()
}
