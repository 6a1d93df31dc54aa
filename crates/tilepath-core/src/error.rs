//! Error types for board construction.

use thiserror::Error;

/// Errors raised when building a [`Board`](crate::Board) from caller input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The grid has no rows or no columns.
    #[error("board must have at least one row and one column")]
    EmptyGrid,

    /// Rows of a nested grid differ in length.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A flat cell vector does not match the given dimensions.
    #[error("expected {expected} cells for the given dimensions, got {got}")]
    CellCountMismatch { expected: usize, got: usize },
}
