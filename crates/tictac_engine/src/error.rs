//! Engine error types.

use crate::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Move selection was requested on a board with no empty square.
    #[display("No move available: the board is full")]
    NoMoveAvailable,

    /// The board handed across the boundary was malformed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// A mark was placed on a square that already holds one.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`EngineErrorKind::InvalidBoard`] error.
    #[track_caller]
    pub fn invalid_board(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::InvalidBoard(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}
