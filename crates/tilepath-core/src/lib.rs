//! Tilepath Core - Board state for rectangular sliding-tile puzzles
//!
//! This crate provides the state abstraction the search engine consumes:
//! - [`Board`]: a rectangular grid of cells with value semantics and a
//!   strict total order
//! - [`Cell`]: blank, stone, or tile
//! - [`Move`]: a single blank/tile swap between adjacent cells
//! - Move enumeration, similarity checking, and the Manhattan-distance
//!   heuristic with its incremental update
//!
//! # Examples
//!
//! ```
//! use tilepath_core::{Board, Cell};
//!
//! let goal = Board::from_rows(vec![
//!     vec![Cell::Tile(1), Cell::Tile(2)],
//!     vec![Cell::Tile(3), Cell::Blank],
//! ])?;
//! let start = goal.swapped(3, 2);
//!
//! assert!(goal.is_similar(&start));
//! assert_eq!(start.distance(&goal), 1);
//! # Ok::<(), tilepath_core::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod error;
pub mod moves;

pub use board::{Board, MoveList};
pub use cell::Cell;
pub use error::BoardError;
pub use moves::Move;
