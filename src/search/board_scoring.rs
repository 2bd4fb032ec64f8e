//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::*;

/// Score of a forced win found at the root; a win `k` plies away scores `WIN_SCORE - k`.
pub const WIN_SCORE: i32 = 1000;

pub const MAN_VALUE: i32 = 10;
pub const KING_VALUE: i32 = 17;

/// Weight of one step of Chebyshev distance from the centre.
const CENTER_WEIGHT: i32 = 3;
const CENTER_RADIUS: i32 = 3;
const CENTER_SQUARES: [(i32, i32); 2] = [(4, 3), (3, 4)];

/// Bonus per piece holding its own back rank.
const BACK_RANK_BONUS: i32 = MAN_VALUE / 2;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `side` (positive favors `side`).
    fn score(&self, board: &Board, side: Color) -> i32;
}

#[inline]
fn from_perspective(white_minus_black: i32, side: Color) -> i32 {
    match side {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}

#[inline]
const fn piece_value(piece: Piece) -> i32 {
    if piece.is_king() {
        KING_VALUE
    } else {
        MAN_VALUE
    }
}

/// Material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, side: Color) -> i32 {
        let white_minus_black = board
            .occupied()
            .map(|(_, piece)| match piece.color() {
                Some(Color::White) => piece_value(piece),
                Some(Color::Black) => -piece_value(piece),
                None => 0,
            })
            .sum();
        from_perspective(white_minus_black, side)
    }
}

/// Material, centralisation and back-rank occupancy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// Smallest Chebyshev distance from `square` to either centre square.
    pub fn center_distance(square: Square) -> i32 {
        let (row, col) = square_to_row_col(square);
        let (row, col) = (i32::from(row), i32::from(col));
        CENTER_SQUARES
            .iter()
            .map(|&(cr, cc)| (row - cr).abs().max((col - cc).abs()))
            .min()
            .unwrap_or(CENTER_RADIUS)
    }

    fn side_score(board: &Board, color: Color) -> i32 {
        let back_rank = color.opposite().promotion_row();
        board
            .pieces_of_color(color)
            .into_iter()
            .map(|square| {
                let piece = board.piece_at(square);
                let centrality = CENTER_WEIGHT * (CENTER_RADIUS - Self::center_distance(square));
                let guard = if square_to_row_col(square).0 == back_rank {
                    BACK_RANK_BONUS
                } else {
                    0
                };
                piece_value(piece) + centrality + guard
            })
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board, side: Color) -> i32 {
        let white_minus_black =
            Self::side_score(board, Color::White) - Self::side_score(board, Color::Black);
        from_perspective(white_minus_black, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::move_generator::generate_moves;

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new_game();
        assert_eq!(PositionalScorer.score(&board, Color::White), 0);
        assert_eq!(MaterialScorer.score(&board, Color::Black), 0);
    }

    #[test]
    fn center_distance_uses_nearest_center_square() {
        assert_eq!(PositionalScorer::center_distance(35), 0); // (4,3)
        assert_eq!(PositionalScorer::center_distance(28), 0); // (3,4)
        assert_eq!(PositionalScorer::center_distance(0), 4);
        assert_eq!(PositionalScorer::center_distance(7), 3);
    }

    #[test]
    fn lone_pieces_score_material_centrality_and_back_rank() {
        // White king on (4,4): 17 + 3*2. Black man on (0,0): 10 + 3*(3-4) + 5.
        let board = Board::with_pieces(&[(36, Piece::WhiteKing), (0, Piece::BlackMan)]);
        assert_eq!(PositionalScorer.score(&board, Color::White), 23 - 12);
        assert_eq!(PositionalScorer.score(&board, Color::Black), 12 - 23);
        assert_eq!(MaterialScorer.score(&board, Color::White), 7);
    }

    #[test]
    fn white_back_rank_piece_earns_guard_bonus() {
        let guarded = Board::with_pieces(&[(57, Piece::WhiteMan)]);
        let advanced = Board::with_pieces(&[(15, Piece::WhiteMan)]);
        // (7,1) is three steps from the centre, (1,7) as well.
        assert_eq!(PositionalScorer.score(&guarded, Color::White), 15);
        assert_eq!(PositionalScorer.score(&advanced, Color::White), 10);
    }

    #[test]
    fn evaluation_is_antisymmetric_along_a_game() {
        let mut board = Board::new_game();
        let mut side = Color::White;
        for ply in 0..40 {
            assert_eq!(
                PositionalScorer.score(&board, Color::White),
                -PositionalScorer.score(&board, Color::Black)
            );
            let moves = generate_moves(&board, side, false);
            if moves.is_empty() {
                break;
            }
            board = apply_move(&board, &moves[(ply * 3) % moves.len()]);
            side = side.opposite();
        }
    }
}
