//! Engine abstraction layer used by front ends and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use std::str::FromStr;

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_random::RandomEngine;
use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::draughts_move::Move;

/// Per-call overrides of an engine's configured limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> EngineResult<()> {
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &GoParams,
    ) -> EngineResult<EngineOutput>;
}

/// Automated player kinds selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Random,
    AlphaBeta,
}

impl PlayerKind {
    pub fn build(self) -> Box<dyn Engine> {
        match self {
            PlayerKind::Random => Box::new(RandomEngine::new()),
            PlayerKind::AlphaBeta => Box::new(AlphaBetaEngine::new()),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(PlayerKind::Random),
            "alphabeta" | "absearch" | "alpha-beta" => Ok(PlayerKind::AlphaBeta),
            _ => Err(EngineError::UnknownPlayer(s.to_owned())),
        }
    }
}

/// Parse an option value, mapping failures to `InvalidOptionValue`.
pub(crate) fn parse_option<T: FromStr>(name: &str, value: &str) -> EngineResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}
