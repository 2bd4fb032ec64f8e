//! Pure move application and reversal.
//!
//! Neither function validates legality: callers only pass moves produced by
//! the move generator for the exact board being transformed.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Piece;
use crate::move_generation::draughts_move::Move;

/// Board after `mv` has been played on `board`.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let moving = board.piece_at(mv.start_square);
    let mut next = *board;

    next.set_piece(mv.start_square, Piece::Empty);
    for square in mv.captured_squares() {
        next.set_piece(square, Piece::Empty);
    }

    let placed = if mv.is_promotion {
        moving.promoted()
    } else {
        moving
    };
    next.set_piece(mv.end_square, placed);
    next
}

/// Board before `mv` was played, given the board right after it.
pub fn undo_move(board: &Board, mv: &Move) -> Board {
    let moved = board.piece_at(mv.end_square);
    let mut previous = *board;

    previous.set_piece(mv.end_square, Piece::Empty);
    for capture in &mv.captures {
        previous.set_piece(capture.square, capture.piece);
    }

    let restored = if mv.is_promotion {
        moved.demoted()
    } else {
        moved
    };
    previous.set_piece(mv.start_square, restored);
    previous
}
