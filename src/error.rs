//! Error taxonomy for the board model and the search engines.

use crate::game::Player;

/// Errors from board mutation. Recoverable: callers re-prompt or pick
/// another column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range")]
    OutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is empty, nothing to undo")]
    ColumnEmpty { column: usize },
}

/// Errors from move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The board is full with no winner. Callers treat this as a draw.
    #[error("no legal moves remain")]
    NoLegalMove,

    /// Move selection was invoked on an already-decided board. This is a
    /// programmer error; the game loop must stop once a winner exists.
    #[error("search invoked on a terminal board ({winner} has already won)")]
    TerminalBoard { winner: Player },

    /// A board operation failed mid-search.
    #[error(transparent)]
    Move(#[from] MoveError),
}
