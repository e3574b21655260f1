//! Core types for gomoku.
//!
//! This crate provides the fundamental types shared by the engine and its bindings:
//! - [`Stone`] for the two players and their pieces
//! - [`Cell`] for board coordinates
//! - [`Diagram`] for the single-line board notation

mod cell;
mod diagram;
mod stone;

pub use cell::{Cell, MAX_BOARD_SIZE};
pub use diagram::{render_diagram, Diagram, DiagramError};
pub use stone::Stone;
