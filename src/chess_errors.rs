//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board construction,
//! move application, selection handling and the small text utilities. Illegal
//! input from the presentation layer (selecting the wrong square, clicking a
//! destination that is not legal) is an expected, frequent outcome and is
//! reported through this type rather than by panicking.
//!
//! Checkmate and stalemate are not errors; they are reported as
//! [`TerminalStatus`] values. Once the game is over, further moves and
//! selections are rejected with [`ChessError::GameOver`].

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Square, TerminalStatus};

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The square is empty or holds a piece of the side not to move.
    InvalidSelection(Square),

    /// The destination is not in the selected piece's legal move set.
    IllegalMove { from: Square, to: Square },

    /// Raw coordinates outside `[0,8)×[0,8)`.
    OutOfBounds { row: i8, col: i8 },

    /// The game already ended in checkmate or stalemate.
    GameOver(TerminalStatus),

    /// A position could not be assembled or a move could not be replayed on
    /// it (missing king, empty origin square, ...).
    InvalidPosition(String),

    /// A text board diagram failed to parse.
    InvalidDiagram(String),

    /// An algebraic square name (for example `e4`) failed to parse.
    InvalidAlgebraic(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSelection(square) => {
                write!(f, "no piece of the side to move on {square}")
            }
            ChessError::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessError::OutOfBounds { row, col } => {
                write!(f, "square ({row}, {col}) is outside the board")
            }
            ChessError::GameOver(status) => write!(f, "game is over: {status:?}"),
            ChessError::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            ChessError::InvalidDiagram(msg) => write!(f, "invalid board diagram: {msg}"),
            ChessError::InvalidAlgebraic(msg) => write!(f, "invalid algebraic square: {msg}"),
        }
    }
}

impl Error for ChessError {}
