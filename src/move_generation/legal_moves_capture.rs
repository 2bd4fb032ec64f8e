//! Capture-chain enumeration.
//!
//! Chains are expanded depth-first from a work stack of immutable partial
//! jumps. Each extension clones the partial capture list instead of mutating a
//! shared one, and a chain is emitted exactly when its landing square offers
//! no further jump. The board itself is never modified while a chain is
//! explored: captured pieces stay in place until the move is applied.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;
use crate::move_generation::draughts_move::{CapturedPiece, Move};

/// A chain under construction.
#[derive(Debug, Clone)]
struct PartialChain {
    landing: Square,
    captures: Vec<CapturedPiece>,
}

/// Append every maximal capture chain available to the piece on `from`.
pub fn generate_piece_captures(board: &Board, from: Square, out: &mut Vec<Move>) {
    let piece = board.piece_at(from);
    let Some(color) = piece.color() else {
        return;
    };

    let mut stack = single_jumps(board, piece, from, &[]);

    while let Some(chain) = stack.pop() {
        let extensions = single_jumps(board, piece, chain.landing, &chain.captures);
        if extensions.is_empty() {
            let (landing_row, _) = square_to_row_col(chain.landing);
            out.push(Move {
                start_square: from,
                end_square: chain.landing,
                captures: chain.captures,
                is_promotion: !piece.is_king() && landing_row == color.promotion_row(),
            });
        } else {
            stack.extend(extensions);
        }
    }
}

/// Append every capture move available to `side`.
pub fn generate_captures(board: &Board, side: Color, out: &mut Vec<Move>) {
    for square in board.pieces_of_color(side) {
        generate_piece_captures(board, square, out);
    }
}

/// One-jump extensions of a chain currently standing on `from`.
fn single_jumps(
    board: &Board,
    piece: Piece,
    from: Square,
    captured: &[CapturedPiece],
) -> Vec<PartialChain> {
    let mut jumps = Vec::new();

    for &direction in piece.directions() {
        let Some(over) = offset_square(from, direction, 1) else {
            continue;
        };
        let Some(landing) = offset_square(from, direction, 2) else {
            continue;
        };

        let victim = board.piece_at(over);
        let is_opponent = matches!(
            (victim.color(), piece.color()),
            (Some(theirs), Some(ours)) if theirs != ours
        );
        if !is_opponent || captured.iter().any(|c| c.square == over) {
            continue;
        }
        if !board.is_empty_square(landing) {
            continue;
        }

        let mut captures = captured.to_vec();
        captures.push(CapturedPiece {
            square: over,
            piece: victim,
        });
        jumps.push(PartialChain { landing, captures });
    }

    jumps
}
