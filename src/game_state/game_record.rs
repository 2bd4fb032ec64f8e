//! Game record with move history, undo and redo.
//!
//! The record owns the current board and side to move, accepts only moves the
//! generator offers for the current position, and rewinds with `undo_move` so
//! an undone position is bit-for-bit the position before the move.

use tracing::debug;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::draughts_rules::FIRST_TO_MOVE;
use crate::game_state::draughts_types::Color;
use crate::game_state::game_outcome::{game_outcome, GameOutcome};
use crate::move_generation::draughts_move::Move;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::move_generator::generate_moves;

#[derive(Debug, Clone)]
pub struct GameRecord {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    redo_stack: Vec<Move>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameRecord {
    pub fn new_game() -> Self {
        Self::from_position(Board::new_game(), FIRST_TO_MOVE)
    }

    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        generate_moves(&self.board, self.side_to_move, false)
    }

    pub fn outcome(&self) -> GameOutcome {
        game_outcome(&self.board, self.side_to_move)
    }

    /// Play `mv` and return the outcome of the resulting position.
    ///
    /// Clears the redo stack, like any editor once a new branch is started.
    pub fn play(&mut self, mv: Move) -> EngineResult<GameOutcome> {
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(EngineError::GameOver(format!("{outcome:?}")));
        }
        if !mv.is_on_board() {
            return Err(EngineError::IllegalMove(format!("{mv:?}")));
        }
        if !self.legal_moves().contains(&mv) {
            return Err(EngineError::IllegalMove(mv.to_string()));
        }

        self.redo_stack.clear();
        self.advance(mv);
        Ok(self.outcome())
    }

    pub fn undo(&mut self) -> EngineResult<Move> {
        let mv = self.history.pop().ok_or(EngineError::NothingToUndo)?;
        self.board = undo_move(&self.board, &mv);
        self.side_to_move = self.side_to_move.opposite();
        debug!(%mv, ply = self.history.len(), "move undone");
        self.redo_stack.push(mv.clone());
        Ok(mv)
    }

    pub fn redo(&mut self) -> EngineResult<Move> {
        let mv = self.redo_stack.pop().ok_or(EngineError::NothingToRedo)?;
        self.advance(mv.clone());
        Ok(mv)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn advance(&mut self, mv: Move) {
        self.board = apply_move(&self.board, &mv);
        self.side_to_move = self.side_to_move.opposite();
        debug!(%mv, ply = self.history.len() + 1, "move played");
        self.history.push(mv);
    }
}
