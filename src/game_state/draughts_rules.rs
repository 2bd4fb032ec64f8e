//! Canonical draughts rule constants.
//!
//! The board is 8x8 and only squares with `(row + col)` even are playable.
//! Black starts on rows 0-2, White on rows 5-7, and White moves first.

use crate::game_state::draughts_types::Color;

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Rows occupied by Black men in the starting position.
pub const BLACK_START_ROWS: std::ops::Range<u8> = 0..3;

/// Rows occupied by White men in the starting position.
pub const WHITE_START_ROWS: std::ops::Range<u8> = 5..8;

/// Side that makes the first move of a game.
pub const FIRST_TO_MOVE: Color = Color::White;

#[inline]
pub const fn is_playable(row: u8, col: u8) -> bool {
    (row + col) % 2 == 0
}
