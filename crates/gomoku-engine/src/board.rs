//! Square grid of stones.

use std::fmt;

use gomoku_core::{render_diagram, Cell, Diagram, DiagramError, Stone, MAX_BOARD_SIZE};
use thiserror::Error;

use crate::config::DEFAULT_BOARD_SIZE;

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Side length outside `1..=MAX_BOARD_SIZE`.
    #[error("invalid board size {0}: expected 1..={max}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),
}

/// A square board whose cells are either empty or hold one stone.
///
/// Cells are stored row-major. The board itself enforces no turn order;
/// [`Game`](crate::Game) is the only writer during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Creates an empty board of the given side length.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Creates a board from a diagram string.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        Ok(Board::from(&Diagram::parse(diagram)?))
    }

    /// Returns the board in diagram notation.
    pub fn to_diagram(&self) -> String {
        render_diagram(self.size, &self.cells)
    }

    /// Returns the side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at signed coordinates if it lies on this board.
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        Cell::checked(row, col, self.size)
    }

    /// Returns true if `cell` lies on this board.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.size && cell.col() < self.size
    }

    /// Returns the stone at `cell`, or `None` if it is empty or off the board.
    #[inline]
    pub fn stone_at(&self, cell: Cell) -> Option<Stone> {
        if self.contains(cell) {
            self.cells[cell.index(self.size)]
        } else {
            None
        }
    }

    /// Returns true if `cell` is on the board and empty.
    #[inline]
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.contains(cell) && self.cells[cell.index(self.size)].is_none()
    }

    /// Writes a stone into an empty cell.
    pub(crate) fn put(&mut self, cell: Cell, stone: Stone) {
        debug_assert!(self.is_vacant(cell), "{cell} must be empty");
        let size = self.size;
        self.cells[cell.index(size)] = Some(stone);
    }

    /// Iterates over all stones in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Cell, Stone)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, stone)| {
            stone.map(|s| (Cell::new((i / size) as u8, (i % size) as u8), s))
        })
    }

    /// Counts the stones of one color.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(stone)).count()
    }

    /// Returns the total number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl From<&Diagram> for Board {
    fn from(diagram: &Diagram) -> Self {
        let size = diagram.size();
        let mut cells = vec![None; size * size];
        for (cell, stone) in diagram.stones() {
            cells[cell.index(size)] = Some(stone);
        }
        Board { size, cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<&str> = row
                .iter()
                .map(|c| match c {
                    None => ".",
                    Some(Stone::Black) => "X",
                    Some(Stone::White) => "O",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
