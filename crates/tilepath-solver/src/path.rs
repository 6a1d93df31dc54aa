//! Stitching two half-paths into one start-to-goal sequence.

use tilepath_core::Board;

use crate::node::NodeId;
use crate::side::SideSearch;

/// Walks both parent chains out from the meeting point and concatenates
/// them into a full path of boards, start to goal inclusive.
///
/// The forward chain is produced root-ward and reversed; the backward
/// chain starts at the meeting node's parent (its own board is already
/// in place) and is appended in natural walk order, which on that side
/// leads toward the goal.
pub(crate) fn reconstruct(
    forward: &SideSearch,
    forward_end: NodeId,
    backward: &SideSearch,
    backward_end: NodeId,
) -> Vec<Board> {
    let mut path = Vec::new();
    let mut cursor = Some(forward_end);
    while let Some(id) = cursor {
        let node = forward.node(id);
        path.push(node.board().clone());
        cursor = node.parent();
    }
    path.reverse();

    let mut cursor = backward.node(backward_end).parent();
    while let Some(id) = cursor {
        let node = backward.node(id);
        path.push(node.board().clone());
        cursor = node.parent();
    }
    path
}
