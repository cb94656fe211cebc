use thiserror::Error;

use crate::types::{Player, Position};

/// Why a text board was rejected. Only the first violation found is reported,
/// checking row count, then row lengths, then characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("Board must contain exactly 8 rows.")]
    RowCount,
    #[error("Each row must contain exactly 8 fields.")]
    RowLength,
    #[error("Board can only contain the characters B, W, or .")]
    InvalidCharacter,
}

/// Move notation was not a column letter `A`-`H` followed by a row `1`-`8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move notation")]
pub struct ParsePositionError;

/// Errors from driving a [`Game`](crate::game::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("{0} has a legal move and cannot pass")]
    PassNotAllowed(Player),
    #[error("illegal move at {0}")]
    IllegalMove(Position),
    #[error(transparent)]
    InvalidNotation(#[from] ParsePositionError),
}
