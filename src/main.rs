//! Single self-play game between two automated players.
//!
//! Run with:
//! `cargo run --release -- --white alphabeta --black random --movetime 500`
//! `RUST_LOG=debug cargo run --release -- --verbose`

use tracing_subscriber::EnvFilter;

use plum_draughts::engines::engine_trait::{Engine, GoParams, PlayerKind};
use plum_draughts::errors::{EngineError, EngineResult};
use plum_draughts::game_state::draughts_types::Color;
use plum_draughts::game_state::game_outcome::GameOutcome;
use plum_draughts::game_state::game_record::GameRecord;

const MAX_PLIES: usize = 200;

struct Args {
    white: PlayerKind,
    black: PlayerKind,
    movetime_ms: Option<u64>,
    verbose: bool,
}

fn parse_args() -> EngineResult<Args> {
    let mut args = Args {
        white: PlayerKind::AlphaBeta,
        black: PlayerKind::Random,
        movetime_ms: None,
        verbose: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--white" => args.white = flag_value(&flag, it.next())?.parse()?,
            "--black" => args.black = flag_value(&flag, it.next())?.parse()?,
            "--movetime" => {
                let value = flag_value(&flag, it.next())?;
                let ms = value
                    .parse::<u64>()
                    .map_err(|_| EngineError::InvalidOptionValue {
                        name: flag.clone(),
                        value: value.clone(),
                    })?;
                args.movetime_ms = Some(ms);
            }
            _ => return Err(EngineError::UnknownOption(flag)),
        }
    }
    Ok(args)
}

fn flag_value(flag: &str, value: Option<String>) -> EngineResult<String> {
    value.ok_or_else(|| EngineError::InvalidOptionValue {
        name: flag.to_owned(),
        value: String::new(),
    })
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args()?;
    let mut white = args.white.build();
    let mut black = args.black.build();
    if let Some(ms) = args.movetime_ms {
        for engine in [&mut white, &mut black] {
            // Random players have no clock; ignore the option for them.
            match engine.set_option("MoveTime", &ms.to_string()) {
                Ok(()) | Err(EngineError::UnknownOption(_)) => {}
                Err(err) => return Err(err),
            }
        }
    }

    println!("White: {}  Black: {}", white.name(), black.name());

    let mut record = GameRecord::new_game();
    let mut outcome = record.outcome();
    while !outcome.is_over() && record.ply() < MAX_PLIES {
        let side = record.side_to_move();
        let engine: &mut Box<dyn Engine> = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let out = engine.choose_move(record.board(), side, &GoParams::default())?;
        if args.verbose {
            for line in &out.info_lines {
                println!("{line}");
            }
        }
        let mv = out.best_move.ok_or(EngineError::NoMoveFound)?;
        println!("{:>3}. {:?} {}", record.ply() + 1, side, mv);
        outcome = record.play(mv)?;
        if args.verbose {
            println!("{}", record.board());
        }
    }

    println!("{}", record.board());
    match outcome {
        GameOutcome::WhiteWins => println!("White wins after {} plies", record.ply()),
        GameOutcome::BlackWins => println!("Black wins after {} plies", record.ply()),
        GameOutcome::Ongoing => println!("Stopped after {} plies without a result", record.ply()),
    }
    Ok(())
}
