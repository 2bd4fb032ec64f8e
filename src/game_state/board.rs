//! Board model for the 8x8 draughts grid.
//!
//! `Board` is a small `Copy` value holding one `Piece` per square. Move
//! application and reversal (see `legal_move_apply`) return new boards rather
//! than mutating shared state, so search can branch and backtrack freely.

use std::fmt;

use crate::game_state::draughts_rules::{
    is_playable, BLACK_START_ROWS, BOARD_SIZE, SQUARE_COUNT, WHITE_START_ROWS,
};
use crate::game_state::draughts_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            squares: [Piece::Empty; SQUARE_COUNT],
        }
    }

    /// Standard starting position: three rows of men per side on playable squares.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !is_playable(row, col) {
                    continue;
                }
                let square = row_col_to_square(row, col);
                if BLACK_START_ROWS.contains(&row) {
                    board.set_piece(square, Piece::BlackMan);
                } else if WHITE_START_ROWS.contains(&row) {
                    board.set_piece(square, Piece::WhiteMan);
                }
            }
        }
        board
    }

    /// Empty board or the standard starting position.
    #[inline]
    pub fn create(standard_starting_position: bool) -> Self {
        if standard_starting_position {
            Self::new_game()
        } else {
            Self::new_empty()
        }
    }

    /// Build a board from explicit rows, row 0 first.
    pub fn from_rows(rows: [[Piece; BOARD_SIZE as usize]; BOARD_SIZE as usize]) -> Self {
        let mut board = Self::new_empty();
        for (row, cells) in rows.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                board.set_piece(row_col_to_square(row as u8, col as u8), *piece);
            }
        }
        board
    }

    /// Build a board from `(square, piece)` placements on an otherwise empty grid.
    pub fn with_pieces(placements: &[(Square, Piece)]) -> Self {
        let mut board = Self::new_empty();
        for &(square, piece) in placements {
            board.set_piece(square, piece);
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    #[inline]
    pub fn piece_at_row_col(&self, row: u8, col: u8) -> Piece {
        self.piece_at(row_col_to_square(row, col))
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.piece_at(square).is_empty()
    }

    /// Squares holding a man or king of `color`, in ascending order.
    pub fn pieces_of_color(&self, color: Color) -> Vec<Square> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.is_color(color))
            .map(|(square, _)| square as Square)
            .collect()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.squares.iter().filter(|&&p| p == piece).count()
    }

    /// Iterate over all occupied squares.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(square, piece)| (square as Square, *piece))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::render_board::render_board(self))
    }
}
