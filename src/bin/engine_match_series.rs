//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --verbose`

use tracing_subscriber::EnvFilter;

use plum_draughts::engines::engine_alpha_beta::AlphaBetaEngine;
use plum_draughts::engines::engine_random::RandomEngine;
use plum_draughts::engines::engine_trait::Engine;
use plum_draughts::errors::EngineError;
use plum_draughts::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = match args.iter().position(|a| a == "--games") {
        Some(idx) => {
            let value = args.get(idx + 1).cloned().unwrap_or_default();
            value
                .parse::<u16>()
                .map_err(|_| EngineError::InvalidOptionValue {
                    name: "--games".to_owned(),
                    value,
                })?
        }
        None => 10,
    };

    // Swap these to compare other engines or depths.
    let player1 = || Box::new(AlphaBetaEngine::new_fixed_depth(5)) as Box<dyn Engine>;
    let player2 = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            per_game: MatchConfig {
                max_plies: 200,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
