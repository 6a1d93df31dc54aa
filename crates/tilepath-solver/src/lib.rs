//! Tilepath Solver - Bidirectional A* search for sliding-tile puzzles
//!
//! This crate provides the search engine over the board abstraction in
//! `tilepath-core`:
//! - [`Searcher`]: the bidirectional driver and its budget policy
//! - [`SideSearch`]: slice-bounded expansion of one direction
//! - Node arena, per-side registry, and an ordered frontier supporting
//!   removal by identity for cost relaxation
//!
//! The search is single-threaded; the slice boundary is a cooperative
//! hand-off between the two directions, not concurrency.

pub mod error;
pub mod frontier;
pub mod node;
pub mod pool;
pub mod searcher;
pub mod side;

mod path;

pub use error::{Result, SolveError};
pub use frontier::{Frontier, OpenKey};
pub use node::{NodeArena, NodeId, SearchNode};
pub use pool::NodePool;
pub use searcher::{Searcher, DEFAULT_SLICE_SIZE};
pub use side::{SideSearch, SliceOutcome};

#[cfg(test)]
mod tests;
