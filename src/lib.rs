//! Crate root module declarations for the Plum Draughts engine project.
//!
//! This file exposes the board model, move generation, search, engines and
//! utility helpers so binaries, benches and external front ends can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_outcome;
    pub mod game_record;
}

pub mod move_generation {
    pub mod draughts_move;
    pub mod legal_move_apply;
    pub mod legal_moves_capture;
    pub mod legal_moves_quiet;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_board;
}
