//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Each depth is searched to completion against a wall-clock deadline. A depth
//! that runs out of time is discarded and the previous depth's move is kept.
//! Deepening stops early once a forced win or loss is proven.
//!
//! Progress is reported through a caller-owned sink receiving `SearchEvent`s;
//! the root best move is threaded back through return values, never through
//! shared state.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::draughts_types::Color;
use crate::move_generation::draughts_move::Move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::search::board_scoring::{BoardScorer, PositionalScorer, WIN_SCORE};

/// Per-move thinking time used when the caller does not override it.
pub const DEFAULT_MOVETIME_MS: u64 = 2_000;

/// Deepening ceiling.
pub const MAX_SEARCH_DEPTH: u8 = 50;

/// Scores within this distance of `WIN_SCORE` are proven results.
const FORCED_RESULT_MARGIN: i32 = 50;

const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// `None` searches to `max_depth` without a deadline.
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            movetime_ms: Some(DEFAULT_MOVETIME_MS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub nps: u64,
}

/// Diagnostic progress emitted while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    DepthCompleted { depth: u8, score: i32 },
    Moved,
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::DepthCompleted { depth, score } => {
                write!(f, "Depth: {depth} Eval: {score}")
            }
            SearchEvent::Moved => f.write_str("Moved"),
        }
    }
}

/// Whether `score` is a proven win or loss rather than a heuristic estimate.
#[inline]
pub fn is_forced_result(score: i32) -> bool {
    score.abs() >= WIN_SCORE - FORCED_RESULT_MARGIN
}

struct SearchContext<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<G: MoveGenerator, S: BoardScorer> SearchContext<'_, G, S> {
    #[inline]
    fn out_of_time(&self) -> bool {
        self.deadline.is_some_and(|limit| Instant::now() >= limit)
    }
}

/// Move for `side` chosen with the default generator, scorer and time budget.
pub fn choose_move(board: &Board, side: Color) -> EngineResult<Move> {
    let (mv, _) = choose_move_with(
        board,
        side,
        &LegalMoveGenerator,
        &PositionalScorer,
        SearchConfig::default(),
        &mut |_| {},
    )?;
    Ok(mv)
}

/// Run the deepening search and insist on a move.
///
/// Fails with `EngineError::NoMoveFound` when no depth recorded a root move,
/// which happens when `side` has no legal moves.
pub fn choose_move_with<G, S, F>(
    board: &Board,
    side: Color,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    on_event: &mut F,
) -> EngineResult<(Move, SearchResult)>
where
    G: MoveGenerator,
    S: BoardScorer,
    F: FnMut(&SearchEvent),
{
    let result = iterative_deepening_search(board, side, generator, scorer, config, on_event);
    let Some(mv) = result.best_move.clone() else {
        return Err(EngineError::NoMoveFound);
    };

    info!(
        %mv,
        depth = result.reached_depth,
        score = result.best_score,
        nodes = result.nodes,
        elapsed_ms = result.elapsed_ms,
        "move chosen"
    );
    on_event(&SearchEvent::Moved);
    Ok((mv, result))
}

pub fn iterative_deepening_search<G, S, F>(
    board: &Board,
    side: Color,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    on_event: &mut F,
) -> SearchResult
where
    G: MoveGenerator,
    S: BoardScorer,
    F: FnMut(&SearchEvent),
{
    let started_at = Instant::now();

    if config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(board, side),
            reached_depth: 0,
            nodes: 1,
            ..SearchResult::default()
        };
    }

    let mut ctx = SearchContext {
        generator,
        scorer,
        deadline: config
            .movetime_ms
            .map(|ms| started_at + Duration::from_millis(ms)),
        nodes: 0,
    };
    let mut result = SearchResult::default();

    for depth in 1..=config.max_depth {
        let Some((best_move, best_score)) = negamax_root(board, side, depth, &mut ctx) else {
            debug!(depth, "deadline reached, discarding partial depth");
            break;
        };

        result.best_move = best_move;
        result.best_score = best_score;
        result.reached_depth = depth;

        debug!(depth, score = best_score, nodes = ctx.nodes, "depth completed");
        on_event(&SearchEvent::DepthCompleted {
            depth,
            score: best_score,
        });

        if is_forced_result(best_score) {
            break;
        }
    }

    result.nodes = ctx.nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result.nps = if result.elapsed_ms == 0 {
        0
    } else {
        result.nodes.saturating_mul(1000) / result.elapsed_ms
    };
    result
}

/// `None` when the deadline interrupted this depth.
fn negamax_root<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    side: Color,
    depth: u8,
    ctx: &mut SearchContext<'_, G, S>,
) -> Option<(Option<Move>, i32)> {
    ctx.nodes += 1;
    let moves = ctx.generator.generate_moves(board, side, false);
    if moves.is_empty() {
        return Some((None, -WIN_SCORE));
    }

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best_move = None;
    let mut best_score = -INFINITY;

    for mv in moves {
        if ctx.out_of_time() {
            return None;
        }

        let next = apply_move(board, &mv);
        let score = -negamax(&next, side.opposite(), -beta, -alpha, depth - 1, 1, ctx)?;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Some((best_move, best_score))
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    side: Color,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    ply: u8,
    ctx: &mut SearchContext<'_, G, S>,
) -> Option<i32> {
    if ctx.out_of_time() {
        return None;
    }
    ctx.nodes += 1;

    if depth == 0 {
        return Some(ctx.scorer.score(board, side));
    }

    let moves = ctx.generator.generate_moves(board, side, false);
    if moves.is_empty() {
        return Some(-WIN_SCORE + i32::from(ply));
    }

    let mut best = -INFINITY;

    for mv in moves {
        let next = apply_move(board, &mv);
        let score = -negamax(
            &next,
            side.opposite(),
            -beta,
            -alpha,
            depth - 1,
            ply.saturating_add(1),
            ctx,
        )?;

        if score > best {
            best = score;
            if score > alpha {
                alpha = score;
                if alpha >= beta {
                    break;
                }
            }
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_types::Piece;
    use crate::move_generation::move_generator::generate_moves;

    /// Generator that never produces moves; every position looks lost.
    struct NullMoveGenerator;

    impl MoveGenerator for NullMoveGenerator {
        fn generate_moves(&self, _board: &Board, _side: Color, _captures_only: bool) -> Vec<Move> {
            Vec::new()
        }
    }

    fn fixed_depth(depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth: depth,
            movetime_ms: None,
        }
    }

    fn search(board: &Board, side: Color, config: SearchConfig) -> SearchResult {
        iterative_deepening_search(
            board,
            side,
            &LegalMoveGenerator,
            &PositionalScorer,
            config,
            &mut |_| {},
        )
    }

    /// Full-width negamax without pruning, for cross-checking scores.
    fn plain_negamax(board: &Board, side: Color, depth: u8, ply: u8) -> i32 {
        if depth == 0 {
            return PositionalScorer.score(board, side);
        }
        let moves = generate_moves(board, side, false);
        if moves.is_empty() {
            return -WIN_SCORE + i32::from(ply);
        }
        moves
            .iter()
            .map(|mv| -plain_negamax(&apply_move(board, mv), side.opposite(), depth - 1, ply + 1))
            .max()
            .unwrap_or(-INFINITY)
    }

    #[test]
    fn search_depth_zero_returns_eval_only() {
        let board = Board::new_game();
        let result = search(&board, Color::White, fixed_depth(0));
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.reached_depth, 0);
    }

    #[test]
    fn depth_one_from_start_returns_a_front_row_step() {
        let board = Board::new_game();
        let result = search(
            &board,
            Color::White,
            SearchConfig {
                max_depth: 1,
                movetime_ms: Some(DEFAULT_MOVETIME_MS),
            },
        );
        let best = result.best_move.expect("depth 1 should complete");
        assert_eq!(result.reached_depth, 1);
        assert!(generate_moves(&board, Color::White, false).contains(&best));
    }

    #[test]
    fn pruned_score_matches_full_width_negamax() {
        let mut board = Board::new_game();
        let mut side = Color::White;
        for ply in 0..12 {
            for depth in 1..=4 {
                let result = search(&board, side, fixed_depth(depth));
                assert_eq!(
                    result.best_score,
                    plain_negamax(&board, side, depth, 0),
                    "ply {ply} depth {depth}"
                );
            }
            let moves = generate_moves(&board, side, false);
            board = apply_move(&board, &moves[(ply * 5) % moves.len()]);
            side = side.opposite();
        }
    }

    #[test]
    fn finishing_capture_is_scored_as_a_win_and_stops_deepening() {
        // White man (5,3) takes the last black man on (4,4).
        let board = Board::with_pieces(&[(43, Piece::WhiteMan), (36, Piece::BlackMan)]);
        let result = search(&board, Color::White, fixed_depth(10));

        assert_eq!(result.best_score, WIN_SCORE - 1);
        assert_eq!(result.reached_depth, 2);
        assert_eq!(result.best_move.map(|m| m.end_square), Some(29));
    }

    #[test]
    fn events_report_each_completed_depth() {
        let board = Board::new_game();
        let mut lines = Vec::new();
        let result = iterative_deepening_search(
            &board,
            Color::White,
            &LegalMoveGenerator,
            &PositionalScorer,
            fixed_depth(3),
            &mut |event| lines.push(event.to_string()),
        );

        assert_eq!(result.reached_depth, 3);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Depth: 1 Eval: "));
        assert_eq!(lines[2], format!("Depth: 3 Eval: {}", result.best_score));
    }

    #[test]
    fn choose_move_emits_moved_last() {
        let board = Board::new_game();
        let mut events = Vec::new();
        let (mv, result) = choose_move_with(
            &board,
            Color::Black,
            &LegalMoveGenerator,
            &PositionalScorer,
            fixed_depth(2),
            &mut |event| events.push(*event),
        )
        .expect("black has moves");

        assert_eq!(Some(mv), result.best_move);
        assert_eq!(events.last(), Some(&SearchEvent::Moved));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn expired_budget_before_depth_one_is_an_engine_fault() {
        let board = Board::new_game();
        let err = choose_move_with(
            &board,
            Color::White,
            &LegalMoveGenerator,
            &PositionalScorer,
            SearchConfig {
                max_depth: MAX_SEARCH_DEPTH,
                movetime_ms: Some(0),
            },
            &mut |_| {},
        )
        .expect_err("no depth can complete with a zero budget");
        assert_eq!(err, EngineError::NoMoveFound);
    }

    #[test]
    fn position_without_moves_is_an_engine_fault() {
        let board = Board::with_pieces(&[(43, Piece::WhiteMan)]);
        assert_eq!(choose_move(&board, Color::Black), Err(EngineError::NoMoveFound));

        let err = choose_move_with(
            &Board::new_game(),
            Color::White,
            &NullMoveGenerator,
            &PositionalScorer,
            fixed_depth(3),
            &mut |_| {},
        )
        .expect_err("null generator offers nothing");
        assert_eq!(err, EngineError::NoMoveFound);
    }

    #[test]
    fn timed_search_returns_a_legal_move() {
        let board = Board::new_game();
        let mv = choose_move(&board, Color::White).expect("start position has moves");
        assert!(generate_moves(&board, Color::White, false).contains(&mv));
    }

    #[test]
    fn interrupted_depth_keeps_last_completed_result() {
        let board = Board::new_game();
        let timed = search(
            &board,
            Color::White,
            SearchConfig {
                max_depth: MAX_SEARCH_DEPTH,
                movetime_ms: Some(30),
            },
        );
        assert!(timed.reached_depth >= 1);
        assert!(timed.reached_depth < MAX_SEARCH_DEPTH);

        let reference = search(&board, Color::White, fixed_depth(timed.reached_depth));
        assert_eq!(reference.reached_depth, timed.reached_depth);
        assert_eq!(timed.best_move, reference.best_move);
        assert_eq!(timed.best_score, reference.best_score);
    }
}
