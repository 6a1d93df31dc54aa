//! Error taxonomy for the search engine.

use thiserror::Error;

/// Failure modes of a bidirectional search.
///
/// `Incompatible` and `BudgetExceeded` are expected outcomes the caller
/// handles (no solution possible, or retry with a larger budget).
/// `Internal` surfaces a broken engine invariant and is not recoverable.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Start and goal differ in dimensions, stone layout, or tile
    /// multiset; no sequence of moves can transform one into the other.
    #[error("incompatible puzzle: {0}")]
    Incompatible(String),

    /// The expansion budget ran out before the two sides met.
    #[error("work budget of {budget} expansions exceeded")]
    BudgetExceeded { budget: u64 },

    /// Internal error (should not occur in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SolveError>;
