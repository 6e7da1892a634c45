//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. It is reserved for
//! conditions that are *not* part of normal play: a corrupted board (grid and
//! piece arena disagreeing), a malformed setup diagram, or an I/O failure
//! while appending to the result log.
//!
//! Usage guidelines:
//! - An illegal or malformed move attempt is never an error. The game facade
//!   reports it as `MoveOutcome::Rejected` and leaves the state untouched.
//! - Invariant variants (`SquareOccupied`, `PieceNotOnBoard`,
//!   `PieceSlotInUse`, `CorruptMoveRecord`) indicate a bug in the engine and
//!   are not meant to be recovered from by callers.
//! - Diagram and I/O variants are recoverable and suitable for presenting to
//!   end users.

use thiserror::Error;

use crate::game_state::chess_types::{PieceId, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Error)]
pub enum ChessErrors {
    /// Generic failure used in tests when no more specific variant applies.
    #[error("test expectation failed")]
    FailedTest,

    /// File or rank outside `0..8`.
    ///
    /// Payload: (file, rank) as supplied by the caller.
    #[error("coordinates ({0}, {1}) are off the board")]
    InvalidFileOrRank(i8, i8),

    /// A primitive tried to put a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// A primitive referenced an arena slot that holds no live piece.
    #[error("piece {0} is not on the board")]
    PieceNotOnBoard(PieceId),

    /// A primitive tried to fill an arena slot that already holds a live piece.
    #[error("piece slot {0} is already in use")]
    PieceSlotInUse(PieceId),

    /// An undo record does not match the board it is replayed against.
    #[error("corrupt move record: {0}")]
    CorruptMoveRecord(String),

    /// The game refused a move the legal move generator produced.
    #[error("generated move was rejected: {0}")]
    UnexpectedRejection(String),

    /// Unexpected character in a board diagram.
    #[error("invalid diagram token '{0}'")]
    InvalidDiagramToken(char),

    /// Board diagram with a malformed structure (wrong rank count, missing kings...).
    #[error("invalid diagram: {0}")]
    InvalidDiagram(String),

    /// Reading or appending the result log failed.
    #[error("result log I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
