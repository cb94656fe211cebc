use tracing::debug;

use crate::board::BoardState;
use crate::error::GameError;
use crate::movegen;
use crate::types::{GameOutcome, GameStatistics, GameStatus, Move, Player, Position};

/// Passes in a row that end the game.
const PASSES_TO_END: u8 = 2;

/// Whether `player` has no legal move on `board` and has to pass.
pub fn must_pass(board: &BoardState, player: Player) -> bool {
    !movegen::has_any_legal_move(board, player)
}

/// Whether neither side can move on `board`.
pub fn is_terminal(board: &BoardState) -> bool {
    must_pass(board, Player::Black) && must_pass(board, Player::White)
}

/// A game in progress. The consecutive-pass count lives here, not on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: BoardState,
    consecutive_passes: u8,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(BoardState::new())
    }

    pub fn from_board(board: BoardState) -> Self {
        Self {
            board,
            consecutive_passes: 0,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::GameOver
        } else {
            GameStatus::Active(self.board.current_player())
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.consecutive_passes >= PASSES_TO_END
    }

    pub fn must_pass(&self) -> bool {
        !self.is_game_over() && must_pass(&self.board, self.board.current_player())
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    pub fn statistics(&self) -> GameStatistics {
        self.board.statistics()
    }

    /// Plays `position` for the side to move.
    pub fn play(&mut self, position: Position) -> Result<Move, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let mv = self
            .board
            .apply_move(position)
            .ok_or(GameError::IllegalMove(position))?;
        self.consecutive_passes = 0;
        Ok(mv)
    }

    /// Plays a move given in notation such as `"D3"`.
    pub fn play_notation(&mut self, notation: &str) -> Result<Move, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        self.play(notation.parse()?)
    }

    /// Skips the turn of a side that has no legal move.
    pub fn pass(&mut self) -> Result<GameStatus, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let player = self.board.current_player();
        if movegen::has_any_legal_move(&self.board, player) {
            return Err(GameError::PassNotAllowed(player));
        }

        self.board = self.board.with_side_to_move(!player);
        self.consecutive_passes += 1;
        debug!(%player, passes = self.consecutive_passes, "pass");

        Ok(self.status())
    }

    /// Winner by disc count once the game is over, `None` while it is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }
        Some(match self.statistics().leader() {
            Some(player) => GameOutcome::Winner(player),
            None => GameOutcome::Draw,
        })
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.consecutive_passes = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
