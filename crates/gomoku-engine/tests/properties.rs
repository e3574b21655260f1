//! Property tests for placement and win detection.

use std::collections::HashMap;

use gomoku_core::{Cell, Diagram, Stone};
use gomoku_engine::{scan_win, Board, Game, GameError, Orientation};
use proptest::prelude::*;

const SIZE: i32 = 17;

fn moves() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-2..SIZE + 2, -2..SIZE + 2), 0..200)
}

fn small_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::weighted(0.6, any::<bool>()), 81).prop_map(|cells| {
        let mut diagram = Diagram::new(9).unwrap();
        for (i, cell) in cells.into_iter().enumerate() {
            let stone = cell.map(|black| if black { Stone::Black } else { Stone::White });
            diagram.set(Cell::new((i / 9) as u8, (i % 9) as u8), stone);
        }
        Board::from(&diagram)
    })
}

/// Length of the run through `cell`, counted with plain index arithmetic.
fn brute_force_run(board: &Board, cell: Cell, stone: Stone, (dr, dc): (i32, i32)) -> usize {
    let size = board.size() as i32;
    let holds = |r: i32, c: i32| {
        r >= 0
            && c >= 0
            && r < size
            && c < size
            && board.stone_at(Cell::new(r as u8, c as u8)) == Some(stone)
    };
    let (r0, c0) = (cell.row() as i32, cell.col() as i32);
    let mut len = 1;
    for sign in [-1, 1] {
        let mut k = 1;
        while holds(r0 + sign * k * dr, c0 + sign * k * dc) {
            len += 1;
            k += 1;
        }
    }
    len
}

proptest! {
    #[test]
    fn placement_follows_the_rules(moves in moves()) {
        let mut game = Game::new();
        let mut placed: HashMap<Cell, Stone> = HashMap::new();
        let mut expected_turn = Stone::Black;

        for (row, col) in moves {
            let before = game.to_diagram();
            let was_over = game.is_over();
            let result = game.place(row, col);
            let on_board = (0..SIZE).contains(&row) && (0..SIZE).contains(&col);

            if was_over {
                prop_assert_eq!(result, Err(GameError::GameOver));
                prop_assert_eq!(game.to_diagram(), before);
                continue;
            }

            if !on_board {
                prop_assert!(
                    matches!(result, Err(GameError::OutOfBounds { .. })),
                    "expected OutOfBounds, got {:?}",
                    result
                );
                prop_assert_eq!(game.to_diagram(), before);
                continue;
            }

            let cell = Cell::new(row as u8, col as u8);
            if let Some(&owner) = placed.get(&cell) {
                prop_assert_eq!(result, Err(GameError::CellOccupied { cell, stone: owner }));
                prop_assert_eq!(game.to_diagram(), before);
                continue;
            }

            let placement = result.unwrap();
            prop_assert_eq!(placement.cell, cell);
            prop_assert_eq!(placement.stone, expected_turn);
            placed.insert(cell, placement.stone);

            if placement.is_win() {
                prop_assert!(game.is_over());
                prop_assert!(placement.winning_line.contains(&cell));
            } else {
                prop_assert!(!game.is_over());
                expected_turn = expected_turn.opposite();
            }
            prop_assert_eq!(game.to_move(), expected_turn);

            // Occupancy never changes once written.
            for (&c, &s) in &placed {
                prop_assert_eq!(game.board().stone_at(c), Some(s));
            }
            prop_assert_eq!(game.stones_placed(), placed.len());
        }
    }

    #[test]
    fn scan_matches_brute_force(board in small_board()) {
        for (cell, stone) in board.stones() {
            let line = scan_win(&board, cell, stone);
            let qualifying: Vec<Orientation> = Orientation::ALL
                .into_iter()
                .filter(|o| brute_force_run(&board, cell, stone, o.delta()) >= 5)
                .collect();

            prop_assert_eq!(line.is_empty(), qualifying.is_empty());

            if let Some(&first) = qualifying.first() {
                let (dr, dc) = first.delta();
                prop_assert_eq!(line.len(), brute_force_run(&board, cell, stone, (dr, dc)));
                prop_assert!(line.contains(&cell));
                for pair in line.windows(2) {
                    prop_assert_eq!(pair[1].row() as i32 - pair[0].row() as i32, dr);
                    prop_assert_eq!(pair[1].col() as i32 - pair[0].col() as i32, dc);
                }
                for c in &line {
                    prop_assert_eq!(board.stone_at(*c), Some(stone));
                }
            }
        }
    }

    #[test]
    fn errors_are_deterministic(row in -3i32..20, col in -3i32..20) {
        let mut game = Game::new();
        let first = game.place(row, col);
        let second = game.place(row, col);
        if first.is_ok() {
            prop_assert!(
                matches!(second, Err(GameError::CellOccupied { .. })),
                "expected CellOccupied, got {:?}",
                second
            );
        } else {
            prop_assert_eq!(first, second);
        }
    }
}
