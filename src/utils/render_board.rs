//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments. Row 0 is printed at the top as rank 8, matching
//! `square_name`.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::BOARD_SIZE;
use crate::game_state::draughts_types::row_col_to_square;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            out.push(board.piece_at(row_col_to_square(row, col)).glyph());
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
