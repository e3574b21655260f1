//! Game session management: placement, turn order, and win state.
//!
//! The [`Game`] struct owns the board for one session and is the only code
//! that writes to it. A session starts with Black to move, alternates after
//! every placement, and stops accepting placements once a line is won.

use gomoku_core::{Cell, DiagramError, Stone};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig, WIN_LENGTH};
use crate::scan::scan_for_run;
use crate::Board;

/// Error type for placement.
///
/// None of these is fatal: the board is left untouched and the caller can
/// simply ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The coordinate is outside the board.
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },
    /// The target cell already holds a stone.
    #[error("cell {cell} is already occupied by {stone}")]
    CellOccupied { cell: Cell, stone: Stone },
    /// A line has already been won this session.
    #[error("game has already ended")]
    GameOver,
}

/// Error type for building a game from a diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("invalid diagram: {0}")]
    Diagram(#[from] DiagramError),
    /// Black moves first, so Black has as many stones as White or one more.
    #[error("impossible stone counts: {black} black, {white} white")]
    StoneCounts { black: usize, white: usize },
    /// Play stops at the first win, so only one color can hold a winning run.
    #[error("both colors already have a winning line")]
    BothWon,
    /// The winning run must have been completed by the last stone placed.
    #[error("{winner} has a winning line but {last} moved last")]
    WinnerNotLastToMove { winner: Stone, last: Stone },
}

/// Where a session stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GameStatus {
    /// Placements are still accepted.
    InProgress,
    /// `winner` completed `line`; no further placements are accepted.
    Won { winner: Stone, line: Vec<Cell> },
}

/// The outcome of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Where the stone went.
    pub cell: Cell,
    /// The color that was placed.
    pub stone: Stone,
    /// The winning run, ordered end to end, or empty if play continues.
    pub winning_line: Vec<Cell>,
}

impl Placement {
    /// Returns true if this placement won the game.
    pub fn is_win(&self) -> bool {
        !self.winning_line.is_empty()
    }
}

/// One game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Stone,
    status: GameStatus,
    win_length: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a session on an empty 17x17 board with Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::default(),
            to_move: Stone::Black,
            status: GameStatus::InProgress,
            win_length: WIN_LENGTH,
        }
    }

    /// Creates a session from a configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game {
            board: Board::new(config.board_size)?,
            to_move: Stone::Black,
            status: GameStatus::InProgress,
            win_length: config.win_length,
        })
    }

    /// Creates a session from a board diagram.
    ///
    /// The side to move follows from the stone counts. If the diagram already
    /// contains a winning run the session starts finished.
    pub fn from_diagram(diagram: &str) -> Result<Self, SetupError> {
        let board = Board::from_diagram(diagram)?;
        let black = board.count(Stone::Black);
        let white = board.count(Stone::White);
        let to_move = if black == white {
            Stone::Black
        } else if black == white + 1 {
            Stone::White
        } else {
            return Err(SetupError::StoneCounts { black, white });
        };

        let mut game = Game {
            board,
            to_move,
            status: GameStatus::InProgress,
            win_length: WIN_LENGTH,
        };
        game.check_existing_win()?;
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the number of stones in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns the player to move. After a win this is the winner.
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    /// Returns the session status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once a line has been won.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Stone> {
        match &self.status {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress => None,
        }
    }

    /// Returns the winning line, or an empty slice while play continues.
    pub fn winning_line(&self) -> &[Cell] {
        match &self.status {
            GameStatus::Won { line, .. } => line,
            GameStatus::InProgress => &[],
        }
    }

    /// Returns the number of stones on the board.
    pub fn stones_placed(&self) -> usize {
        self.board.stone_count()
    }

    /// Returns the stone at signed coordinates, or `None` if empty or off the board.
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        self.board.cell(row, col).and_then(|c| self.board.stone_at(c))
    }

    /// Returns the board as a diagram string.
    pub fn to_diagram(&self) -> String {
        self.board.to_diagram()
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// On success the win scan runs from the new stone. A win ends the
    /// session; otherwise the turn passes to the other player. On error
    /// nothing changes.
    pub fn place(&mut self, row: i32, col: i32) -> Result<Placement, GameError> {
        let result = self.try_place(row, col);
        if let Err(err) = &result {
            debug!(row, col, %err, "placement rejected");
        }
        result
    }

    fn try_place(&mut self, row: i32, col: i32) -> Result<Placement, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let cell = self.board.cell(row, col).ok_or(GameError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })?;

        if let Some(stone) = self.board.stone_at(cell) {
            return Err(GameError::CellOccupied { cell, stone });
        }

        let stone = self.to_move;
        self.board.put(cell, stone);
        debug!(row, col, %stone, "stone placed");

        let winning_line = scan_for_run(&self.board, cell, stone, self.win_length);
        if winning_line.is_empty() {
            self.to_move = stone.opposite();
        } else {
            info!(winner = %stone, length = winning_line.len(), "line completed");
            self.status = GameStatus::Won {
                winner: stone,
                line: winning_line.clone(),
            };
        }

        Ok(Placement {
            cell,
            stone,
            winning_line,
        })
    }

    /// Marks the session won if the board already holds a winning run.
    ///
    /// Each color's first run is found in row-major order. A position where
    /// both colors have won, or where the winner was not the last to move,
    /// cannot arise in play and is rejected.
    fn check_existing_win(&mut self) -> Result<(), SetupError> {
        let mut runs: [Option<Vec<Cell>>; 2] = [None, None];
        for (cell, stone) in self.board.stones() {
            if runs[stone.index()].is_some() {
                continue;
            }
            let line = scan_for_run(&self.board, cell, stone, self.win_length);
            if !line.is_empty() {
                runs[stone.index()] = Some(line);
            }
        }

        let (winner, line) = match runs {
            [None, None] => return Ok(()),
            [Some(_), Some(_)] => return Err(SetupError::BothWon),
            [Some(line), None] => (Stone::Black, line),
            [None, Some(line)] => (Stone::White, line),
        };

        // The side to move is the opponent of whoever placed last.
        let last = self.to_move.opposite();
        if winner != last {
            return Err(SetupError::WinnerNotLastToMove { winner, last });
        }

        info!(%winner, length = line.len(), "diagram already contains a win");
        self.to_move = winner;
        self.status = GameStatus::Won { winner, line };
        Ok(())
    }
}
