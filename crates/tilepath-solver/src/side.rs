//! Slice-bounded expansion of one search direction.

use tracing::trace;

use tilepath_core::Board;

use crate::frontier::{Frontier, OpenKey};
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::pool::NodePool;

/// Result of one bounded slice of expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceOutcome {
    /// The extracted node's board is the side's target, or the opposing
    /// side has already discovered it.
    Met(NodeId),
    /// No meeting yet: the slice ran out of expansions, or the frontier
    /// ran dry. Not a failure; the driver decides whether to keep
    /// alternating until the budget settles it.
    Pending,
}

/// One directed half of the bidirectional search.
///
/// Owns its arena, registry, and frontier exclusively; the opposing
/// side's registry is borrowed read-only per slice for meeting
/// detection.
#[derive(Debug)]
pub struct SideSearch {
    arena: NodeArena,
    pool: NodePool,
    frontier: Frontier,
    target: Board,
    slice_size: u64,
}

impl SideSearch {
    /// Creates a side rooted at `root` and aimed at `target`.
    ///
    /// The root's heuristic is computed exactly; every later node gets
    /// the incremental update.
    pub fn new(root: Board, target: Board, slice_size: u64) -> Self {
        let heuristic = root.distance(&target);
        let mut arena = NodeArena::new();
        let mut pool = NodePool::new();
        let mut frontier = Frontier::new();
        let node = SearchNode::root(root.clone(), heuristic);
        let key = OpenKey::of(&node);
        let id = arena.push(node);
        pool.insert(root, id);
        frontier.insert(key, id);
        Self {
            arena,
            pool,
            frontier,
            target,
            slice_size,
        }
    }

    /// Returns this side's registry, for the opposing side's meeting
    /// checks and for the driver's meeting-point pairing.
    #[inline]
    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    /// Returns the node behind `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.arena.get(id)
    }

    /// Returns the number of nodes this side has discovered.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.arena.len()
    }

    /// Runs at most `slice_size` expansions, then suspends so the
    /// driver can hand control to the other side.
    pub fn run_slice(&mut self, other: &NodePool) -> SliceOutcome {
        for _ in 0..self.slice_size {
            let Some(current_id) = self.frontier.pop_min() else {
                return SliceOutcome::Pending;
            };
            let (mut board, cost, heuristic) = {
                let node = self.arena.get(current_id);
                (node.board().clone(), node.cost(), node.heuristic())
            };

            if board == self.target || other.find(&board).is_some() {
                trace!(event = "meeting", cost, heuristic);
                return SliceOutcome::Met(current_id);
            }

            let next_cost = cost + 1;
            for mv in board.possible_moves() {
                board.swap(mv.from, mv.to);
                match self.pool.find(&board) {
                    None => {
                        let next_heuristic = board.update_distance(&self.target, heuristic, mv);
                        let node =
                            SearchNode::child(board.clone(), next_cost, next_heuristic, current_id);
                        let key = OpenKey::of(&node);
                        let id = self.arena.push(node);
                        self.pool.insert(board.clone(), id);
                        self.frontier.insert(key, id);
                    }
                    Some(seen_id) => {
                        // Relaxation applies only to nodes still open;
                        // an already-finalized node stays as it is.
                        let key = OpenKey::of(self.arena.get(seen_id));
                        if self.frontier.remove(&key) {
                            let node = self.arena.get_mut(seen_id);
                            if node.cost() > next_cost {
                                node.relax(next_cost, current_id);
                            }
                            let key = OpenKey::of(self.arena.get(seen_id));
                            self.frontier.insert(key, seen_id);
                        }
                    }
                }
                // Undo the trial move before the next candidate.
                board.swap(mv.from, mv.to);
            }
        }
        SliceOutcome::Pending
    }
}
