//! WebAssembly bindings for the gomoku rules engine.
//!
//! The browser side owns the canvas and the click-to-cell mapping; this crate
//! only exposes the session.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Gomoku } from 'gomoku-wasm';
//!
//! await init();
//!
//! const game = new Gomoku();        // 17x17
//! const placed = game.place(8, 8);  // { cell, stone, winningLine }
//! if (placed.winningLine.length > 0) {
//!   console.log(`${placed.stone} wins`);
//! }
//! ```

use gomoku_core::Stone;
use gomoku_engine::{Game, GameConfig};
use wasm_bindgen::prelude::*;

/// A gomoku session that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Gomoku {
    game: Game,
}

#[wasm_bindgen]
impl Gomoku {
    /// Creates a session. Without a size the board is 17x17.
    ///
    /// Throws if the size is outside 1..=64.
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: Option<u32>) -> Result<Gomoku, JsError> {
        let config = match board_size {
            Some(size) => GameConfig::with_board_size(size as usize).map_err(js_error)?,
            None => GameConfig::default(),
        };
        let game = Game::with_config(&config).map_err(js_error)?;
        Ok(Gomoku { game })
    }

    /// Creates a session from a board diagram such as `"5/1x3/5/5/5"`.
    #[wasm_bindgen(js_name = fromDiagram)]
    pub fn from_diagram(diagram: &str) -> Result<Gomoku, JsError> {
        let game = Game::from_diagram(diagram).map_err(js_error)?;
        Ok(Gomoku { game })
    }

    /// Places the current player's stone.
    ///
    /// Returns `{ cell: {row, col}, stone, winningLine: [{row, col}, ...] }`.
    /// Throws if the cell is off the board, occupied, or the game is over;
    /// the session is unchanged in that case.
    pub fn place(&mut self, row: i32, col: i32) -> Result<JsValue, JsError> {
        let placement = self.game.place(row, col).map_err(js_error)?;
        serde_wasm_bindgen::to_value(&placement).map_err(js_error)
    }

    /// Returns the player to move ("black" or "white").
    #[wasm_bindgen(js_name = toMove)]
    pub fn to_move(&self) -> String {
        color_name(self.game.to_move())
    }

    /// Returns true once a line has been won.
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Returns "black" or "white" once the game is won, or null.
    pub fn winner(&self) -> Option<String> {
        self.game.winner().map(color_name)
    }

    /// Returns the winning cells as `[{row, col}, ...]`, empty while play continues.
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.game.winning_line()).map_err(js_error)
    }

    /// Returns the stone at a cell, or null if empty or off the board.
    #[wasm_bindgen(js_name = stoneAt)]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<String> {
        self.game.stone_at(row, col).map(color_name)
    }

    /// Returns the board side length.
    pub fn size(&self) -> u32 {
        self.game.size() as u32
    }

    /// Returns the number of stones on the board.
    #[wasm_bindgen(js_name = stonesPlaced)]
    pub fn stones_placed(&self) -> u32 {
        self.game.stones_placed() as u32
    }

    /// Returns true if no empty cell is left.
    #[wasm_bindgen(js_name = isFull)]
    pub fn is_full(&self) -> bool {
        self.game.board().is_full()
    }

    /// Returns the board as a diagram string.
    #[wasm_bindgen(js_name = toDiagram)]
    pub fn to_diagram(&self) -> String {
        self.game.to_diagram()
    }
}

fn color_name(stone: Stone) -> String {
    match stone {
        Stone::Black => "black".to_string(),
        Stone::White => "white".to_string(),
    }
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session() {
        let game = Gomoku::new(None).unwrap();
        assert_eq!(game.size(), 17);
        assert_eq!(game.to_move(), "black");
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn sized_session() {
        let game = Gomoku::new(Some(9)).unwrap();
        assert_eq!(game.size(), 9);
        assert_eq!(game.to_diagram(), vec!["9"; 9].join("/"));
    }

    #[test]
    fn from_diagram() {
        let game = Gomoku::from_diagram("5/1x3/5/5/5").unwrap();
        assert_eq!(game.to_move(), "white");
        assert_eq!(game.stone_at(1, 1), Some("black".to_string()));
        assert_eq!(game.stone_at(0, 0), None);
        assert_eq!(game.stone_at(-1, 0), None);
        assert_eq!(game.stones_placed(), 1);
        assert!(!game.is_full());
    }

    #[test]
    fn finished_diagram() {
        let game = Gomoku::from_diagram("5/xxxxx/oooo1/5/5").unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some("black".to_string()));
    }
}
