//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other without
//! any front end, drawing the game once a ply cap is reached.

use std::time::Instant;

use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::game_state::game_outcome::GameOutcome;
use crate::game_state::game_record::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single match from the standard starting position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> EngineResult<MatchResult> {
    play_engine_match_from_record(GameRecord::new_game(), engine_white, engine_black, config)
}

/// Play a single match continuing from `record`.
pub fn play_engine_match_from_record(
    mut record: GameRecord,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> EngineResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = record.outcome();
    for _ in 0..config.max_plies {
        if outcome.is_over() {
            break;
        }

        let mover = record.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let out = engine.choose_move(record.board(), mover, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(EngineError::NoMoveFound)?;
        debug!(engine = engine.name(), mv = %chosen, "engine moved");
        played_moves.push(chosen.to_string());
        outcome = record.play(chosen)?;
    }

    let outcome = match outcome {
        GameOutcome::WhiteWins => MatchOutcome::WhiteWin,
        GameOutcome::BlackWins => MatchOutcome::BlackWin,
        GameOutcome::Ongoing => MatchOutcome::DrawMaxPlies,
    };

    Ok(MatchResult {
        outcome,
        final_board: *record.board(),
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player 1 takes White in even-numbered games and Black in odd ones.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> EngineResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for game_idx in 0..config.games {
        let mut p1 = player1_factory();
        let mut p2 = player2_factory();
        let p1_is_white = game_idx % 2 == 0;

        let result = if p1_is_white {
            play_engine_match(p1.as_mut(), p2.as_mut(), &config.per_game)?
        } else {
            play_engine_match(p2.as_mut(), p1.as_mut(), &config.per_game)?
        };

        let (p1_moves, p1_time, p2_moves, p2_time) = if p1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player2_moves += p2_moves;
        stats.player1_total_time_ns += p1_time;
        stats.player2_total_time_ns += p2_time;

        let series_outcome = match (result.outcome, p1_is_white) {
            (MatchOutcome::WhiteWin, true) | (MatchOutcome::BlackWin, false) => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player1,
                    color: if p1_is_white { Color::White } else { Color::Black },
                }
            }
            (MatchOutcome::WhiteWin, false) | (MatchOutcome::BlackWin, true) => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player2,
                    color: if p1_is_white { Color::Black } else { Color::White },
                }
            }
            (MatchOutcome::DrawMaxPlies, _) => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(series_outcome);

        if config.verbose {
            info!(
                game = game_idx + 1,
                outcome = ?series_outcome,
                plies = result.played_moves.len(),
                "game finished"
            );
        }
    }

    stats.player1_avg_move_time_ms = average_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = average_ms(stats.player2_total_time_ns, stats.player2_moves);
    Ok(stats)
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
