use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::BOARD_SIZE;
use crate::error::ParseBoardError;
use crate::movegen;
use crate::types::{Cell, GameStatistics, Move, Player, Position};

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// An Othello position: the 8x8 grid and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    grid: Grid,
    side_to_move: Player,
}

impl BoardState {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white, Black to move.
    pub fn new() -> Self {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        grid[3][3] = Cell::White;
        grid[3][4] = Cell::Black;
        grid[4][3] = Cell::Black;
        grid[4][4] = Cell::White;

        Self {
            grid,
            side_to_move: Player::Black,
        }
    }

    /// Parses the text board format: 8 lines of 8 characters from `B`, `W`, `.`.
    pub fn from_text(text: &str, side_to_move: Player) -> Result<Self, ParseBoardError> {
        let rows: Vec<&str> = text.split('\n').collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount);
        }
        if rows.iter().any(|row| row.chars().count() != BOARD_SIZE) {
            return Err(ParseBoardError::RowLength);
        }

        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (cells, row) in grid.iter_mut().zip(&rows) {
            for (cell, c) in cells.iter_mut().zip(row.chars()) {
                *cell = Cell::from_char(c).ok_or(ParseBoardError::InvalidCharacter)?;
            }
        }

        Ok(Self { grid, side_to_move })
    }

    /// Inverse of [`BoardState::from_text`]. The side to move is not included.
    pub fn to_text(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Puts the board back into the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn current_player(&self) -> Player {
        self.side_to_move
    }

    /// A copy of this board with `player` to move.
    pub fn with_side_to_move(&self, player: Player) -> Self {
        Self {
            side_to_move: player,
            ..*self
        }
    }

    /// Cell at `position`, or `None` off the board.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        position.is_on_board().then(|| self.cell_at(position))
    }

    /// Caller contract: `position` is on the board.
    pub(crate) fn cell_at(&self, position: Position) -> Cell {
        self.grid[position.row as usize][position.col as usize]
    }

    fn set(&mut self, position: Position, cell: Cell) {
        self.grid[position.row as usize][position.col as usize] = cell;
    }

    /// See [`movegen::legal_moves`].
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    /// See [`movegen::has_any_legal_move`].
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        movegen::has_any_legal_move(self, player)
    }

    /// Places a disc for the side to move, flips captured discs and passes the
    /// turn. Returns the applied move, or `None` (board untouched) when illegal.
    pub fn apply_move(&mut self, position: Position) -> Option<Move> {
        let player = self.side_to_move;
        let Some(flips) = movegen::captures(self, position, player) else {
            let reason = match self.cell(position) {
                None => "off board",
                Some(Cell::Empty) => "no captures",
                Some(_) => "occupied",
            };
            debug!(%player, %position, reason, "rejected move");
            return None;
        };

        let disc = Cell::from(player);
        self.set(position, disc);
        for &square in &flips {
            self.set(square, disc);
        }
        self.side_to_move = !player;

        trace!(%player, %position, flipped = flips.len(), "applied move");
        Some(Move::new(position, flips))
    }

    /// Returns whether the move was legal and applied.
    pub fn try_apply_move(&mut self, position: Position) -> bool {
        self.apply_move(position).is_some()
    }

    /// Like [`BoardState::try_apply_move`], taking notation such as `"D3"`.
    /// Unparseable notation is rejected without touching the board.
    pub fn try_apply_notation(&mut self, notation: &str) -> bool {
        match notation.parse::<Position>() {
            Ok(position) => self.try_apply_move(position),
            Err(err) => {
                debug!(notation, %err, "rejected move");
                false
            }
        }
    }

    /// Returns disc counts for both sides.
    pub fn statistics(&self) -> GameStatistics {
        self.grid
            .iter()
            .flatten()
            .fold(GameStatistics::default(), |mut stats, cell| {
                match cell {
                    Cell::Black => stats.black += 1,
                    Cell::White => stats.white += 1,
                    Cell::Empty => {}
                }
                stats
            })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the text format with Black to move.
impl FromStr for BoardState {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s, Player::default())
    }
}

/// Console view with column letters and row numbers. Black is `●`, White `○`.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   A B C D E F G H")?;
        writeln!(f, "  ┌───────────────┐")?;

        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{} │", row + 1)?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(match cell {
                    Cell::Black => "●",
                    Cell::White => "○",
                    Cell::Empty => " ",
                })?;
            }
            writeln!(f, "│")?;
        }

        write!(f, "  └───────────────┘")
    }
}
