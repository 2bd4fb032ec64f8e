//! Game-outcome arbiter: a side with no legal moves has lost.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::move_generator::generate_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl GameOutcome {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::WhiteWins,
            Color::Black => GameOutcome::BlackWins,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

/// Outcome of `board` with `side` to move.
pub fn game_outcome(board: &Board, side: Color) -> GameOutcome {
    if generate_moves(board, side, false).is_empty() {
        GameOutcome::win_for(side.opposite())
    } else {
        GameOutcome::Ongoing
    }
}
