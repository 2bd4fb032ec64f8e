//! Quiet (non-capturing) step generation.
//!
//! Men step one square diagonally forward, kings one square in any diagonal
//! direction. The forced-capture rule is applied by the caller.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;
use crate::move_generation::draughts_move::Move;

/// Append single diagonal steps into empty squares for the piece on `from`.
pub fn generate_piece_quiet_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    let piece = board.piece_at(from);
    let Some(color) = piece.color() else {
        return;
    };

    for &direction in piece.directions() {
        let Some(to) = offset_square(from, direction, 1) else {
            continue;
        };
        if !board.is_empty_square(to) {
            continue;
        }
        let (to_row, _) = square_to_row_col(to);
        out.push(Move::quiet(
            from,
            to,
            !piece.is_king() && to_row == color.promotion_row(),
        ));
    }
}

pub fn generate_quiet_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for square in board.pieces_of_color(side) {
        generate_piece_quiet_moves(board, square, out);
    }
}
