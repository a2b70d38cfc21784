//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur when constructing a board.
///
/// Reconciliation itself is infallible: every malformed drag outcome
/// degrades to a no-op rather than an error.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A task id appears in more than one place on the board
    #[error("duplicate task ID: {id}")]
    DuplicateTaskId { id: String },

    /// A column id appears more than once
    #[error("duplicate column ID: {id}")]
    DuplicateColumnId { id: String },
}
