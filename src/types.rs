use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BOARD_SIZE;
use crate::board::BoardState;
use crate::error::ParsePositionError;

const COLUMN_LABELS: &str = "ABCDEFGH";

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Character used by the text board format.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// Inverse of [`Cell::to_char`]. Returns `None` for any other character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'B' => Some(Cell::Black),
            'W' => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// A board coordinate. Row 0 is the top row, column 0 the leftmost column.
///
/// Off-board coordinates are representable so that callers can ask about them;
/// every board operation treats them as illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Self::new(row, col)))
    }

    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Step one square in direction `(dr, dc)`. Returns `None` when leaving the board.
    pub(crate) fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self { row, col };
        next.is_on_board().then_some(next)
    }
}

/// Parse algebraic notation: a column letter `A`-`H` (any case) followed by a
/// row number `1`-`8`, e.g. `"D3"`.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&s.len()) {
            return Err(ParsePositionError);
        }

        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_char).ok_or(ParsePositionError)? as u8;

        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePositionError);
        }
        let row: u8 = digits.parse().map_err(|_| ParsePositionError)?;
        if !(1..=BOARD_SIZE as u8).contains(&row) {
            return Err(ParsePositionError);
        }

        Ok(Self::new(row - 1, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let col = COLUMN_LABELS
            .chars()
            .nth(self.col as usize)
            .ok_or(fmt::Error)?;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// A legal placement together with the opponent discs it flips.
///
/// Only the move generator builds these, and only from a non-empty capture set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    position: Position,
    #[serde(rename = "flippedPositions")]
    captures: Vec<Position>,
}

impl Move {
    pub(crate) fn new(position: Position, captures: Vec<Position>) -> Self {
        debug_assert!(!captures.is_empty(), "a move must capture at least one disc");
        Self { position, captures }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Captured squares, grouped by direction (NW, N, NE, W, E, SW, S, SE),
    /// nearest square first within each direction.
    pub fn captures(&self) -> &[Position] {
        &self.captures
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (flips {})", self.position, self.captures.len())
    }
}

/// Disc counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStatistics {
    pub black: u8,
    pub white: u8,
}

impl GameStatistics {
    /// Number of empty squares. Zero for counts that overfill the board.
    pub fn empty(&self) -> u8 {
        ((BOARD_SIZE * BOARD_SIZE) as u8)
            .saturating_sub(self.black)
            .saturating_sub(self.white)
    }

    /// The side with more discs, or `None` on equal counts.
    pub fn leader(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Whose turn it is, or that nobody can move any more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Active(Player),
    GameOver,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Snapshot handed to tool callers: legal moves plus the position they apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidMovesReport {
    pub current_player: Player,
    pub board: String,
    pub statistics: GameStatistics,
    pub moves: Vec<Move>,
}

impl ValidMovesReport {
    pub fn new(board: &BoardState, moves: Vec<Move>) -> Self {
        Self {
            current_player: board.current_player(),
            board: board.to_text(),
            statistics: board.statistics(),
            moves,
        }
    }
}
