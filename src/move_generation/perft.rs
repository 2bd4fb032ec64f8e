//! Perft node counting for validating the move generator.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub multi_captures: usize,
    pub promotions: usize,
    /// Leaf positions where the side to move has no legal reply.
    pub wins: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.multi_captures += rhs.multi_captures;
        self.promotions += rhs.promotions;
        self.wins += rhs.wins;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, side, false) {
        let next = apply_move(board, &mv);
        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(mv.is_capture());
            total.multi_captures += usize::from(mv.captures.len() > 1);
            total.promotions += usize::from(mv.is_promotion);
            total.wins += usize::from(
                generator
                    .generate_moves(&next, side.opposite(), false)
                    .is_empty(),
            );
        } else {
            total.merge(perft(generator, &next, side.opposite(), depth - 1));
        }
    }
    total
}

/// Leaf node count only.
#[inline]
pub fn perft_nodes<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> usize {
    perft(generator, board, side, depth).nodes
}

/// Node count below each root move, for pinpointing generator mismatches.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    generator
        .generate_moves(board, side, false)
        .into_iter()
        .map(|mv| {
            let next = apply_move(board, &mv);
            let nodes = perft_nodes(generator, &next, side.opposite(), depth - 1);
            (mv.to_string(), nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_types::Piece;
    use crate::move_generation::move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_is_one_node() {
        let board = Board::new_game();
        assert_eq!(perft_nodes(&LegalMoveGenerator, &board, Color::White, 0), 1);
    }

    #[test]
    fn perft_from_starting_position() {
        let board = Board::new_game();
        let gen = LegalMoveGenerator;
        assert_eq!(perft_nodes(&gen, &board, Color::White, 1), 7);
        assert_eq!(perft_nodes(&gen, &board, Color::White, 2), 49);
        assert_eq!(perft_nodes(&gen, &board, Color::White, 3), 302);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::new_game();
        let gen = LegalMoveGenerator;
        let divide = perft_divide(&gen, &board, Color::White, 3);
        assert_eq!(divide.len(), 7);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<usize>(), 302);
    }

    #[test]
    fn leaf_counters_track_capture_kinds() {
        let board = Board::with_pieces(&[
            (9, Piece::BlackMan),
            (18, Piece::WhiteMan),
            (36, Piece::WhiteMan),
        ]);
        let counts = perft(&LegalMoveGenerator, &board, Color::Black, 1);
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.multi_captures, 1);
        assert_eq!(counts.wins, 1);
    }
}
