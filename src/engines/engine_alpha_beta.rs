//! Time-bounded alpha-beta engine.
//!
//! Wraps the iterative deepening search behind the `Engine` trait. Search
//! progress lines (`Depth: d Eval: e`, `Moved`) are collected into the
//! output's info lines.

use crate::engines::engine_trait::{parse_option, Engine, EngineOutput, GoParams};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::iterative_deepening::{choose_move_with, SearchConfig};

pub struct AlphaBetaEngine<S: BoardScorer = PositionalScorer> {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: S,
}

impl AlphaBetaEngine<PositionalScorer> {
    pub fn new() -> Self {
        Self::new_with_scorer(PositionalScorer, SearchConfig::default())
    }

    /// Fixed-depth engine without a deadline, for reproducible play.
    pub fn new_fixed_depth(depth: u8) -> Self {
        Self::new_with_scorer(
            PositionalScorer,
            SearchConfig {
                max_depth: depth,
                movetime_ms: None,
            },
        )
    }
}

impl Default for AlphaBetaEngine<PositionalScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn new_with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self {
            config,
            move_generator: LegalMoveGenerator,
            scorer,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    fn resolve(&self, params: &GoParams) -> SearchConfig {
        SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
            movetime_ms: params.movetime_ms.or(self.config.movetime_ms),
        }
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "PlumDraughts AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        match name {
            "MoveTime" => {
                let ms: u64 = parse_option(name, value)?;
                self.config.movetime_ms = (ms > 0).then_some(ms);
            }
            "MaxDepth" => {
                let depth: u8 = parse_option(name, value)?;
                if depth == 0 {
                    return Err(EngineError::InvalidOptionValue {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    });
                }
                self.config.max_depth = depth;
            }
            _ => return Err(EngineError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &GoParams,
    ) -> EngineResult<EngineOutput> {
        let config = self.resolve(params);
        let mut out = EngineOutput::default();

        let (mv, result) = choose_move_with(
            board,
            side,
            &self.move_generator,
            &self.scorer,
            config,
            &mut |event| out.info_lines.push(event.to_string()),
        )?;

        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {} nps {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms, result.nps
        ));
        out.best_move = Some(mv);
        Ok(out)
    }
}
