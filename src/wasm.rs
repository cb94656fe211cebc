use wasm_bindgen::prelude::*;

use crate::board::BoardState;
use crate::game::Game;
use crate::types::{Player, Position, ValidMovesReport};

#[wasm_bindgen]
pub struct OthelloSession {
    game: Game,
}

#[wasm_bindgen]
impl OthelloSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Starts over from the opening position.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Replaces the position with a text board. Throws the validation message.
    pub fn load(&mut self, text: &str, white_to_move: bool) -> Result<(), JsError> {
        let player = if white_to_move {
            Player::White
        } else {
            Player::Black
        };
        let board = BoardState::from_text(text, player)?;
        self.game = Game::from_board(board);
        Ok(())
    }

    /// Legal moves with their flips, plus the board and disc counts they apply to.
    pub fn valid_moves(&self) -> Result<JsValue, JsError> {
        let report = ValidMovesReport::new(self.game.board(), self.game.legal_moves());
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Any integers are accepted; squares off the board are simply illegal.
    pub fn try_apply_move(&mut self, row: i32, col: i32) -> bool {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row), Ok(col)) => self.game.play(Position::new(row, col)).is_ok(),
            _ => false,
        }
    }

    pub fn try_apply_notation(&mut self, notation: &str) -> bool {
        self.game.play_notation(notation).is_ok()
    }

    /// Skips the turn of a side without legal moves. Throws otherwise.
    pub fn pass(&mut self) -> Result<(), JsError> {
        self.game.pass()?;
        Ok(())
    }

    pub fn must_pass(&self) -> bool {
        self.game.must_pass()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn current_player(&self) -> String {
        self.game.board().current_player().to_string()
    }

    pub fn show_board(&self) -> String {
        self.game.board().to_string()
    }

    pub fn board_text(&self) -> String {
        self.game.board().to_text()
    }

    pub fn statistics(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.statistics())?)
    }

    /// `undefined` until the game is over.
    pub fn outcome(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.outcome())?)
    }
}

impl Default for OthelloSession {
    fn default() -> Self {
        Self::new()
    }
}
