//! Per-side registry deduplicating nodes by board.

use std::collections::BTreeMap;

use tilepath_core::Board;

use crate::node::NodeId;

/// Maps each discovered board to its single live node on one search
/// side.
///
/// The map is keyed by the board's total order. One pool exists per
/// side and is never shared with the other side; the opposing pool is
/// only ever consulted read-only for meeting detection.
#[derive(Debug, Default)]
pub struct NodePool {
    map: BTreeMap<Board, NodeId>,
}

impl NodePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the node registered for a board.
    #[inline]
    pub fn find(&self, board: &Board) -> Option<NodeId> {
        self.map.get(board).copied()
    }

    /// Registers a newly discovered board.
    ///
    /// Each board is registered at most once per side; a second insert
    /// is a sequencing bug in the caller and trips a debug assertion.
    pub fn insert(&mut self, board: Board, id: NodeId) {
        let previous = self.map.insert(board, id);
        debug_assert!(previous.is_none(), "board already registered in pool");
    }

    /// Returns the number of registered boards.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
