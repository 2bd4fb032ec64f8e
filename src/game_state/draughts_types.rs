//! Core value types shared by the board model, move generation and search.
//!
//! Squares are plain indices (`0..=63`, row-major from row 0). `Piece` is the
//! per-square state stored in a `Board` and carries both color and rank.

use crate::game_state::draughts_rules::BOARD_SIZE;

/// Board square index (`0..=63`).
pub type Square = u8;

/// A diagonal step as `(row_delta, col_delta)`.
pub type Direction = (i8, i8);

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row a man of this color must reach to be crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Row delta of a forward step for a man of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

const WHITE_MAN_DIRECTIONS: [Direction; 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_DIRECTIONS: [Direction; 2] = [(1, -1), (1, 1)];
const KING_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    WhiteMan,
    BlackMan,
    WhiteKing,
    BlackKing,
}

impl Piece {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::WhiteMan | Piece::WhiteKing => Some(Color::White),
            Piece::BlackMan | Piece::BlackKing => Some(Color::Black),
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Crowned version of this piece. Kings and empty squares are unchanged.
    #[inline]
    pub const fn promoted(self) -> Self {
        match self {
            Piece::WhiteMan => Piece::WhiteKing,
            Piece::BlackMan => Piece::BlackKing,
            other => other,
        }
    }

    /// Uncrowned version of this piece. Men and empty squares are unchanged.
    #[inline]
    pub const fn demoted(self) -> Self {
        match self {
            Piece::WhiteKing => Piece::WhiteMan,
            Piece::BlackKing => Piece::BlackMan,
            other => other,
        }
    }

    /// Diagonal directions this piece may step or jump along.
    #[inline]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Piece::Empty => &[],
            Piece::WhiteMan => &WHITE_MAN_DIRECTIONS,
            Piece::BlackMan => &BLACK_MAN_DIRECTIONS,
            Piece::WhiteKing | Piece::BlackKing => &KING_DIRECTIONS,
        }
    }

    /// Single-character glyph used by the text renderer.
    pub const fn glyph(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::WhiteMan => 'w',
            Piece::BlackMan => 'b',
            Piece::WhiteKing => 'W',
            Piece::BlackKing => 'B',
        }
    }
}

#[inline]
pub const fn square_to_row_col(square: Square) -> (u8, u8) {
    (square / BOARD_SIZE, square % BOARD_SIZE)
}

#[inline]
pub const fn row_col_to_square(row: u8, col: u8) -> Square {
    row * BOARD_SIZE + col
}

/// Square reached by stepping `steps` times along `direction`, if on the board.
#[inline]
pub fn offset_square(square: Square, direction: Direction, steps: i8) -> Option<Square> {
    let (row, col) = square_to_row_col(square);
    let row = row as i8 + direction.0 * steps;
    let col = col as i8 + direction.1 * steps;
    let size = BOARD_SIZE as i8;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some(row_col_to_square(row as u8, col as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_conversion_is_row_major() {
        assert_eq!(square_to_row_col(0), (0, 0));
        assert_eq!(square_to_row_col(13), (1, 5));
        assert_eq!(square_to_row_col(63), (7, 7));
        for square in 0..64u8 {
            let (row, col) = square_to_row_col(square);
            assert_eq!(row_col_to_square(row, col), square);
        }
    }

    #[test]
    fn offset_square_rejects_off_board_targets() {
        assert_eq!(offset_square(0, (-1, -1), 1), None);
        assert_eq!(offset_square(7, (1, 1), 1), None);
        assert_eq!(offset_square(9, (1, 1), 2), Some(27));
        assert_eq!(offset_square(49, (1, -1), 2), None);
    }

    #[test]
    fn promotion_and_demotion_keep_color() {
        assert_eq!(Piece::WhiteMan.promoted(), Piece::WhiteKing);
        assert_eq!(Piece::BlackKing.demoted(), Piece::BlackMan);
        assert_eq!(Piece::WhiteKing.promoted(), Piece::WhiteKing);
        assert_eq!(Piece::Empty.promoted(), Piece::Empty);
        assert_eq!(Piece::BlackMan.promoted().color(), Some(Color::Black));
    }

    #[test]
    fn men_move_forward_kings_move_both_ways() {
        assert!(Piece::WhiteMan
            .directions()
            .iter()
            .all(|&(dr, _)| dr == Color::White.forward()));
        assert!(Piece::BlackMan
            .directions()
            .iter()
            .all(|&(dr, _)| dr == Color::Black.forward()));
        assert_eq!(Piece::BlackKing.directions().len(), 4);
        assert!(Piece::Empty.directions().is_empty());
    }
}
