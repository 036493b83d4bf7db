//! Error types for the engine and board parsing.

use crate::action::MoveError;
use crate::types::Player;
use derive_more::{Display, Error, From};

/// Raised when the engine is asked for a move it cannot make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineError {
    /// The board has no empty squares.
    #[display("No available cells to choose from")]
    NoAvailableCells,

    /// Computer and opponent were given the same mark.
    #[display("Computer and opponent both play {}", _0)]
    IdenticalMarks(Player),
}

impl std::error::Error for EngineError {}

/// Any failure while driving a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum TicTacToeError {
    /// A placement was rejected.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// The engine was misused.
    #[display("Engine misuse: {}", _0)]
    Engine(EngineError),
}

/// Board notation parse error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
