//! Search nodes and the per-side arena that owns them.
//!
//! Nodes are referenced simultaneously by the registry, the frontier,
//! and their descendants' parent links, so ownership is centralized in
//! an append-only arena and everything else holds a stable [`NodeId`].

use tilepath_core::Board;

/// Stable handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A discovered board with its path cost and heuristic estimate.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The board this node represents.
    board: Board,

    /// Moves from this side's root along the best path found so far (g).
    cost: u32,

    /// Heuristic estimate toward the side's target (h). Computed
    /// exactly at the root, maintained incrementally afterwards.
    heuristic: u32,

    /// Frontier ordering key (f = g + h).
    priority: u32,

    /// Parent in the arena (None for the side's root).
    parent: Option<NodeId>,
}

impl SearchNode {
    /// Creates a side's root node with an exactly computed heuristic.
    pub fn root(board: Board, heuristic: u32) -> Self {
        Self {
            board,
            cost: 0,
            heuristic,
            priority: heuristic,
            parent: None,
        }
    }

    /// Creates a node for a board first discovered at `cost` moves.
    pub fn child(board: Board, cost: u32, heuristic: u32, parent: NodeId) -> Self {
        Self {
            board,
            cost,
            heuristic,
            priority: heuristic + cost,
            parent: Some(parent),
        }
    }

    /// Returns the board this node represents.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the path cost from the side's root (g).
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns the heuristic base (h).
    #[inline]
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Returns the frontier priority (f = g + h).
    #[inline]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns the parent node id, if any.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Lowers this node onto a cheaper path through `parent`.
    ///
    /// The heuristic base is already known for the board and stays put;
    /// only cost, priority, and the parent link change.
    pub fn relax(&mut self, cost: u32, parent: NodeId) {
        debug_assert!(cost < self.cost, "relaxation must strictly lower cost");
        self.cost = cost;
        self.priority = self.heuristic + cost;
        self.parent = Some(parent);
    }
}

/// Append-only node storage for one search side.
///
/// Ids stay valid for the arena's whole lifetime because nodes are never
/// removed individually; the side discards the arena as a whole when the
/// search concludes.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node behind `id`.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Returns the node behind `id` for mutation.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Returns the number of stored nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Cell;

    fn tiny_board() -> Board {
        Board::new(1, 2, vec![Cell::Blank, Cell::Tile(1)]).unwrap()
    }

    #[test]
    fn test_root_node() {
        let node = SearchNode::root(tiny_board(), 3);
        assert_eq!(node.cost(), 0);
        assert_eq!(node.heuristic(), 3);
        assert_eq!(node.priority(), 3);
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_child_node() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(tiny_board(), 3));
        let node = SearchNode::child(tiny_board().swapped(0, 1), 1, 2, root);
        assert_eq!(node.cost(), 1);
        assert_eq!(node.priority(), 3);
        assert_eq!(node.parent(), Some(root));
    }

    #[test]
    fn test_relax_keeps_heuristic_base() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(tiny_board(), 0));
        let other = arena.push(SearchNode::root(tiny_board().swapped(0, 1), 1));
        let mut node = SearchNode::child(tiny_board(), 5, 4, other);
        node.relax(2, root);
        assert_eq!(node.cost(), 2);
        assert_eq!(node.heuristic(), 4);
        assert_eq!(node.priority(), 6);
        assert_eq!(node.parent(), Some(root));
    }

    #[test]
    fn test_arena_handles_stay_valid() {
        let mut arena = NodeArena::new();
        let first = arena.push(SearchNode::root(tiny_board(), 1));
        let second = arena.push(SearchNode::child(tiny_board().swapped(0, 1), 3, 2, first));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(first).heuristic(), 1);
        assert_eq!(arena.get(second).heuristic(), 2);
        arena.get_mut(second).relax(1, first);
        assert_eq!(arena.get(second).parent(), Some(first));
    }
}
