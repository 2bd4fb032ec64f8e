//! Errors used throughout the draughts engine.
//!
//! Move generation, application and reversal are infallible. Failures only
//! arise at the engine and game-record boundary, where a caller asked for
//! something the position cannot provide or passed an unknown setting.

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Search finished without recording a root move. The side to move has
    /// no legal moves, or the budget expired before depth 1 completed; check
    /// the game outcome before asking for a move.
    #[error("engine failed to find any move")]
    NoMoveFound,

    /// The move was not produced by the generator for the current board.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The game is already decided.
    #[error("game is over: {0}")]
    GameOver(String),

    #[error("no move to undo")]
    NothingToUndo,

    #[error("no move to redo")]
    NothingToRedo,

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },

    #[error("unknown player kind: {0}")]
    UnknownPlayer(String),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
