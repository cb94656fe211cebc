//! An Othello (Reversi) board engine.
//!
//! [`BoardState`] holds a position and applies moves, [`movegen`] finds legal
//! moves with the discs each one flips, and [`Game`] tracks passes until neither
//! side can move. [`OthelloSession`] exposes the same operations to JavaScript.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;
pub mod wasm;

pub use board::BoardState;
pub use error::{GameError, ParseBoardError, ParsePositionError};
pub use game::{Game, is_terminal, must_pass};
pub use types::{
    Cell, GameOutcome, GameStatistics, GameStatus, Move, Player, Position, ValidMovesReport,
};
pub use wasm::OthelloSession;

/// Squares along one edge of the board.
pub const BOARD_SIZE: usize = 8;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
