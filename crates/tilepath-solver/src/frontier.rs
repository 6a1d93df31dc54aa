//! Ordered open set with removal by identity.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use tilepath_core::Board;

use crate::node::{NodeId, SearchNode};

/// Composite extraction key: ascending priority, then *descending* cost
/// (among equal f-values, prefer the node further along its path, which
/// has less heuristic left and causes fewer re-expansions), then the
/// board's own order to make the whole thing strict.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpenKey {
    priority: u32,
    cost: Reverse<u32>,
    board: Board,
}

impl OpenKey {
    /// Builds the key for a node's current cost and priority.
    ///
    /// Relaxation changes both, so a key must be taken *before* mutating
    /// the node when it is needed for removal.
    pub fn of(node: &SearchNode) -> Self {
        Self {
            priority: node.priority(),
            cost: Reverse(node.cost()),
            board: node.board().clone(),
        }
    }
}

/// The open set of one search side.
///
/// A balanced map rather than a binary heap: cost relaxation needs to
/// pull an arbitrary known element back out before reinserting it under
/// its new key, which a plain heap cannot do.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: BTreeMap<OpenKey, NodeId>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a node under its key.
    ///
    /// A node may be open at most once; a duplicate insert is a
    /// sequencing bug in the caller and trips a debug assertion.
    pub fn insert(&mut self, key: OpenKey, id: NodeId) {
        let previous = self.queue.insert(key, id);
        debug_assert!(previous.is_none(), "node already open");
    }

    /// Removes a node by its exact key, reporting whether it was open.
    ///
    /// Returning `false` means the node was already extracted and
    /// finalized; relaxation must leave it alone in that case.
    pub fn remove(&mut self, key: &OpenKey) -> bool {
        self.queue.remove(key).is_some()
    }

    /// Extracts the node with the smallest key.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        self.queue.pop_first().map(|(_, id)| id)
    }

    /// Returns whether any node is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
