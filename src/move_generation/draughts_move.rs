//! Move value type.
//!
//! A `Move` records everything needed to both apply and exactly undo one ply:
//! origin, destination, every captured square together with the piece that
//! stood there, and whether the mover is crowned on arrival.

use std::fmt;

use crate::game_state::draughts_rules::SQUARE_COUNT;
use crate::game_state::draughts_types::*;

/// One opponent piece removed during a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapturedPiece {
    pub square: Square,
    pub piece: Piece,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub start_square: Square,
    pub end_square: Square,
    /// Captures in jump order, first jump first.
    pub captures: Vec<CapturedPiece>,
    pub is_promotion: bool,
}

impl Move {
    #[inline]
    pub fn quiet(start_square: Square, end_square: Square, is_promotion: bool) -> Self {
        Self {
            start_square,
            end_square,
            captures: Vec::new(),
            is_promotion,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Whether every square the move names lies on the board.
    pub fn is_on_board(&self) -> bool {
        let on_board = |square: Square| (square as usize) < SQUARE_COUNT;
        on_board(self.start_square)
            && on_board(self.end_square)
            && self.captured_squares().all(on_board)
    }

    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.captures.iter().map(|c| c.square)
    }

    pub fn captured_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.captures.iter().map(|c| c.piece)
    }

    /// Landing squares visited along the path, ending with `end_square`.
    ///
    /// Every jump lands two steps past the origin in the direction of the
    /// captured piece, so intermediate landings are recovered from captures.
    pub fn landing_squares(&self) -> Vec<Square> {
        if self.captures.is_empty() {
            return vec![self.end_square];
        }
        let mut landings = Vec::with_capacity(self.captures.len());
        let mut from = self.start_square;
        for capture in &self.captures {
            let landing = 2 * i16::from(capture.square) - i16::from(from);
            match Square::try_from(landing) {
                Ok(square) => {
                    from = square;
                    landings.push(square);
                }
                Err(_) => {
                    landings.push(self.end_square);
                    break;
                }
            }
        }
        landings
    }
}

/// Human-readable column/row name, `a8`-style with row 0 printed as rank 8.
pub fn square_name(square: Square) -> String {
    if square as usize >= SQUARE_COUNT {
        return "??".to_owned();
    }
    let (row, col) = square_to_row_col(square);
    format!("{}{}", char::from(b'a' + col), 8 - row)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", square_name(self.start_square))?;
        if self.is_capture() {
            for landing in self.landing_squares() {
                write!(f, "x{}", square_name(landing))?;
            }
        } else {
            write!(f, "-{}", square_name(self.end_square))?;
        }
        if self.is_promotion {
            f.write_str("=K")?;
        }
        Ok(())
    }
}
