//! Gomoku rules engine.
//!
//! This crate provides:
//! - [`Board`] - Square grid of stones with diagram conversion
//! - [`Game`] - One session: placement, turn alternation, and win state
//! - [`scan_win`] - Five-in-a-row detection from a single cell
//! - [`GameConfig`] - Construction-time board size and win length
//!
//! # Example
//!
//! ```
//! use gomoku_engine::Game;
//! use gomoku_core::Stone;
//!
//! let mut game = Game::new();
//! for col in 0..4 {
//!     game.place(8, col).unwrap(); // Black
//!     game.place(9, col).unwrap(); // White
//! }
//! let placement = game.place(8, 4).unwrap();
//! assert_eq!(placement.stone, Stone::Black);
//! assert_eq!(placement.winning_line.len(), 5);
//! assert!(game.place(0, 0).is_err());
//! ```

mod board;
pub mod config;
mod game;
pub mod scan;

pub use board::{Board, BoardError};
pub use config::{ConfigError, GameConfig, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use game::{Game, GameError, GameStatus, Placement, SetupError};
pub use scan::{run_through, scan_win, Orientation};
