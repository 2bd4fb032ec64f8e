//! Legal move generation entry points.
//!
//! Captures are mandatory: quiet moves are only produced when no piece of the
//! side to move can capture. An empty result means the side to move has lost.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Color, Square};
use crate::move_generation::draughts_move::Move;
use crate::move_generation::legal_moves_capture::{generate_captures, generate_piece_captures};
use crate::move_generation::legal_moves_quiet::generate_quiet_moves;

/// Pluggable move source so search can be driven by alternate generators in tests.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, side: Color, captures_only: bool) -> Vec<Move>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, side: Color, captures_only: bool) -> Vec<Move> {
        generate_moves(board, side, captures_only)
    }
}

/// All legal moves for `side`, or only captures when `captures_only` is set.
pub fn generate_moves(board: &Board, side: Color, captures_only: bool) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    generate_captures(board, side, &mut moves);
    if !moves.is_empty() || captures_only {
        return moves;
    }
    generate_quiet_moves(board, side, &mut moves);
    moves
}

/// Legal moves that start on `square`, honoring the forced-capture rule for
/// the whole side. Used by front ends to highlight reachable squares.
pub fn generate_moves_from(board: &Board, square: Square) -> Vec<Move> {
    let Some(side) = board.piece_at(square).color() else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    generate_piece_captures(board, square, &mut moves);
    if !moves.is_empty() {
        return moves;
    }
    generate_moves(board, side, false)
        .into_iter()
        .filter(|m| m.start_square == square)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_types::{offset_square, square_to_row_col, Piece};
    use crate::move_generation::legal_move_apply::apply_move;

    /// No emitted chain may stop on a square that still offers a jump over an
    /// uncaptured opponent. Pieces stay on the board while a chain is built.
    fn assert_chains_are_maximal(board: &Board, side: Color, moves: &[Move]) {
        for mv in moves.iter().filter(|m| m.is_capture()) {
            let piece = board.piece_at(mv.start_square);
            for &direction in piece.directions() {
                let (Some(over), Some(landing)) = (
                    offset_square(mv.end_square, direction, 1),
                    offset_square(mv.end_square, direction, 2),
                ) else {
                    continue;
                };
                let victim = board.piece_at(over);
                let open = victim.is_color(side.opposite())
                    && !mv.captured_squares().any(|sq| sq == over)
                    && board.is_empty_square(landing);
                assert!(!open, "{side:?} chain {mv} stops while a jump over {over} remains");
            }
        }
    }

    #[test]
    fn starting_position_has_seven_quiet_moves_from_front_row() {
        let board = Board::new_game();
        let moves = generate_moves(&board, Color::White, false);

        assert_eq!(moves.len(), 7);
        for mv in &moves {
            assert!(!mv.is_capture());
            assert!(!mv.is_promotion);
            assert_eq!(square_to_row_col(mv.start_square).0, 5);
            assert_eq!(square_to_row_col(mv.end_square).0, 4);
        }
        assert!(generate_moves(&board, Color::White, true).is_empty());
    }

    #[test]
    fn single_capture_is_forced_over_quiet_moves() {
        // White man (5,3) faces black man (4,4) with (3,5) empty; another white
        // man on (6,6) has quiet options that must be suppressed.
        let board = Board::with_pieces(&[
            (43, Piece::WhiteMan),
            (36, Piece::BlackMan),
            (54, Piece::WhiteMan),
        ]);
        let moves = generate_moves(&board, Color::White, false);

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].start_square, 43);
        assert_eq!(moves[0].end_square, 29);
        assert_eq!(moves[0].captured_squares().collect::<Vec<_>>(), vec![36]);
        assert_eq!(moves[0].captured_pieces().collect::<Vec<_>>(), vec![Piece::BlackMan]);
    }

    #[test]
    fn double_jump_is_one_move_in_jump_order() {
        // Black man (1,1) jumps (2,2) to (3,3), then (4,4) to (5,5).
        let board = Board::with_pieces(&[
            (9, Piece::BlackMan),
            (18, Piece::WhiteMan),
            (36, Piece::WhiteMan),
        ]);
        let moves = generate_moves(&board, Color::Black, false);

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].captured_squares().collect::<Vec<_>>(), vec![18, 36]);
        assert_eq!(moves[0].end_square, 45);
        assert_chains_are_maximal(&board, Color::Black, &moves);
    }

    #[test]
    fn captures_only_is_empty_without_captures() {
        let board = Board::with_pieces(&[(43, Piece::WhiteMan)]);
        assert!(generate_moves(&board, Color::White, true).is_empty());
        assert_eq!(generate_moves(&board, Color::White, false).len(), 2);
    }

    #[test]
    fn forced_capture_holds_along_played_games() {
        let mut board = Board::new_game();
        let mut side = Color::White;
        for ply in 0..60 {
            let moves = generate_moves(&board, side, false);
            if moves.is_empty() {
                break;
            }
            if moves.iter().any(Move::is_capture) {
                assert!(moves.iter().all(Move::is_capture), "mixed moves at ply {ply}");
            }
            assert_chains_are_maximal(&board, side, &moves);
            board = apply_move(&board, &moves[(ply * 7) % moves.len()]);
            side = side.opposite();
        }
    }

    #[test]
    fn moves_from_square_respect_forced_capture() {
        let board = Board::with_pieces(&[
            (43, Piece::WhiteMan),
            (36, Piece::BlackMan),
            (54, Piece::WhiteMan),
        ]);
        assert!(generate_moves_from(&board, 54).is_empty());
        assert_eq!(generate_moves_from(&board, 43).len(), 1);
        assert!(generate_moves_from(&board, 0).is_empty());
    }
}
