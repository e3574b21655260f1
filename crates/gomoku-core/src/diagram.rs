//! Single-line board diagram notation.
//!
//! A diagram lists the rows of a square board from row 0 downwards, separated
//! by `/`. Inside a row, `x` is a Black stone, `o` a White stone, and a decimal
//! number is that many consecutive empty cells:
//!
//! ```
//! use gomoku_core::{Cell, Diagram, Stone};
//!
//! let diagram = Diagram::parse("5/1x3/2o2/5/5").unwrap();
//! assert_eq!(diagram.size(), 5);
//! assert_eq!(diagram.get(Cell::new(1, 1)), Some(Stone::Black));
//! assert_eq!(diagram.to_string(), "5/1x3/2o2/5/5");
//! ```

use crate::{Cell, Stone, MAX_BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("empty diagram")]
    Empty,

    #[error("board side {0} exceeds the maximum of {max}", max = MAX_BOARD_SIZE)]
    TooLarge(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// A parsed board diagram: a square grid of optional stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Diagram {
    /// Creates an empty diagram with the given side length.
    pub fn new(size: usize) -> Result<Self, DiagramError> {
        if size == 0 {
            return Err(DiagramError::Empty);
        }
        if size > MAX_BOARD_SIZE {
            return Err(DiagramError::TooLarge(size));
        }
        Ok(Diagram {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Parses a diagram string.
    pub fn parse(diagram: &str) -> Result<Self, DiagramError> {
        let diagram = diagram.trim();
        if diagram.is_empty() {
            return Err(DiagramError::Empty);
        }

        let rows: Vec<&str> = diagram.split('/').collect();
        let size = rows.len();
        if size > MAX_BOARD_SIZE {
            return Err(DiagramError::TooLarge(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let mut got = 0usize;
            let mut run = 0usize;

            for ch in text.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    run = run.saturating_mul(10).saturating_add(digit as usize);
                    continue;
                }

                let stone = Stone::from_char(ch).ok_or(DiagramError::InvalidCharacter { ch, row })?;
                got = got.saturating_add(run).saturating_add(1);
                if got > size {
                    return Err(DiagramError::RowLength {
                        row,
                        expected: size,
                        got,
                    });
                }
                cells.extend(std::iter::repeat(None).take(run));
                cells.push(Some(stone));
                run = 0;
            }

            got = got.saturating_add(run);
            if got != size {
                return Err(DiagramError::RowLength {
                    row,
                    expected: size,
                    got,
                });
            }
            cells.extend(std::iter::repeat(None).take(run));
        }

        Ok(Diagram { size, cells })
    }

    /// Returns the board side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the stone at `cell`, or `None` if it is empty or off the board.
    pub fn get(&self, cell: Cell) -> Option<Stone> {
        if cell.row() >= self.size || cell.col() >= self.size {
            return None;
        }
        self.cells[cell.index(self.size)]
    }

    /// Places or clears a stone. Cells off the board are ignored.
    pub fn set(&mut self, cell: Cell, stone: Option<Stone>) {
        if cell.row() < self.size && cell.col() < self.size {
            self.cells[cell.index(self.size)] = stone;
        }
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
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.size, &self.cells)
    }
}

/// Renders row-major cells of a `size`-sided board in diagram notation.
///
/// Unlike [`Diagram::new`] this does not check the size, so grids that
/// already hold their own cells can render without an intermediate copy.
pub fn render_diagram(size: usize, cells: &[Option<Stone>]) -> String {
    let mut out = String::with_capacity(cells.len());
    // Writing into a String cannot fail.
    let _ = write_rows(&mut out, size, cells);
    out
}

fn write_rows<W: fmt::Write>(out: &mut W, size: usize, cells: &[Option<Stone>]) -> fmt::Result {
    if size == 0 {
        return Ok(());
    }
    for (row, cells) in cells.chunks(size).enumerate() {
        if row > 0 {
            out.write_str("/")?;
        }
        let mut run = 0;
        for cell in cells {
            match cell {
                None => run += 1,
                Some(stone) => {
                    if run > 0 {
                        write!(out, "{}", run)?;
                        run = 0;
                    }
                    out.write_char(stone.to_char())?;
                }
            }
        }
        if run > 0 {
            write!(out, "{}", run)?;
        }
    }
    Ok(())
}

impl std::str::FromStr for Diagram {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Diagram::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_board() {
        let diagram = Diagram::parse("3/3/3").unwrap();
        assert_eq!(diagram.size(), 3);
        assert_eq!(diagram.stones().count(), 0);
    }

    #[test]
    fn parse_stones() {
        let diagram = Diagram::parse("x1o/3/2X").unwrap();
        assert_eq!(diagram.get(Cell::new(0, 0)), Some(Stone::Black));
        assert_eq!(diagram.get(Cell::new(0, 1)), None);
        assert_eq!(diagram.get(Cell::new(0, 2)), Some(Stone::White));
        assert_eq!(diagram.get(Cell::new(2, 2)), Some(Stone::Black));
        assert_eq!(diagram.count(Stone::Black), 2);
        assert_eq!(diagram.count(Stone::White), 1);
    }

    #[test]
    fn parse_multi_digit_runs() {
        let rows = vec!["12"; 12].join("/");
        let diagram = Diagram::parse(&rows).unwrap();
        assert_eq!(diagram.size(), 12);

        let mut rows = vec!["12".to_string(); 12];
        rows[11] = "10xo".to_string();
        let diagram = Diagram::parse(&rows.join("/")).unwrap();
        assert_eq!(diagram.get(Cell::new(11, 10)), Some(Stone::Black));
        assert_eq!(diagram.get(Cell::new(11, 11)), Some(Stone::White));
    }

    #[test]
    fn roundtrip() {
        let original = "5/1x3/2o2/xxxxo/5";
        let parsed = Diagram::parse(original).unwrap();
        assert_eq!(parsed.to_string(), original);
    }

    #[test]
    fn stones_are_row_major() {
        let diagram = Diagram::parse("2o/x2/1x1").unwrap();
        let stones: Vec<_> = diagram.stones().collect();
        assert_eq!(
            stones,
            vec![
                (Cell::new(0, 2), Stone::White),
                (Cell::new(1, 0), Stone::Black),
                (Cell::new(2, 1), Stone::Black),
            ]
        );
    }

    #[test]
    fn set_and_render() {
        let mut diagram = Diagram::new(4).unwrap();
        diagram.set(Cell::new(1, 2), Some(Stone::White));
        diagram.set(Cell::new(9, 9), Some(Stone::Black));
        assert_eq!(diagram.to_string(), "4/2o1/4/4");
    }

    #[test]
    fn render_matches_display() {
        let diagram = Diagram::parse("3/o1x/3").unwrap();
        let cells = [None, None, None, Some(Stone::White), None, Some(Stone::Black), None, None, None];
        assert_eq!(render_diagram(3, &cells), diagram.to_string());
        assert_eq!(render_diagram(0, &[]), "");
    }

    #[test]
    fn empty_diagram() {
        assert_eq!(Diagram::parse(""), Err(DiagramError::Empty));
        assert_eq!(Diagram::parse("   "), Err(DiagramError::Empty));
        assert_eq!(Diagram::new(0), Err(DiagramError::Empty));
    }

    #[test]
    fn too_large() {
        let rows = vec!["65"; 65].join("/");
        assert_eq!(Diagram::parse(&rows), Err(DiagramError::TooLarge(65)));
        assert_eq!(Diagram::new(65), Err(DiagramError::TooLarge(65)));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Diagram::parse("3/1z1/3"),
            Err(DiagramError::InvalidCharacter { ch: 'z', row: 1 })
        );
    }

    #[test]
    fn wrong_row_length() {
        assert_eq!(
            Diagram::parse("3/2/3"),
            Err(DiagramError::RowLength {
                row: 1,
                expected: 3,
                got: 2
            })
        );
        assert!(matches!(
            Diagram::parse("3/xxxx/3"),
            Err(DiagramError::RowLength { row: 1, .. })
        ));
        assert!(matches!(
            Diagram::parse("3/99999999999999999999999/3"),
            Err(DiagramError::RowLength { row: 1, .. })
        ));
    }

    #[test]
    fn error_display() {
        let err = DiagramError::InvalidCharacter { ch: 'q', row: 4 };
        assert!(err.to_string().contains('q'));
        assert!(err.to_string().contains('4'));

        let err = DiagramError::TooLarge(70);
        assert!(err.to_string().contains("70"));
    }
}
