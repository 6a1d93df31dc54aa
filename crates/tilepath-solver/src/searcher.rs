//! Bidirectional driver alternating two directed searches.

use tracing::{debug, info};

use tilepath_config::SearchConfig;
use tilepath_core::Board;

use crate::error::SolveError;
use crate::node::NodeId;
use crate::path::reconstruct;
use crate::side::{SideSearch, SliceOutcome};

/// Expansions one side performs before the driver switches sides.
pub const DEFAULT_SLICE_SIZE: u64 = 10_000;

/// Bidirectional shortest-path searcher over sliding-tile boards.
///
/// Two independent best-first searches grow toward each other (forward
/// from the start, backward from the goal) and the path is stitched at
/// the first board both have discovered. Each side only has to cover
/// roughly half the depth, which is what makes deep puzzles tractable.
///
/// # Examples
///
/// ```
/// use tilepath_core::{Board, Cell};
/// use tilepath_solver::Searcher;
///
/// let goal = Board::from_rows(vec![
///     vec![Cell::Tile(1), Cell::Tile(2)],
///     vec![Cell::Tile(3), Cell::Blank],
/// ])?;
/// let start = goal.swapped(3, 2);
///
/// let path = Searcher::new().solve(&start, &goal, 100_000)?;
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[0], start);
/// assert_eq!(path[1], goal);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    slice_size: u64,
}

impl Searcher {
    /// Creates a searcher with the default slice size.
    pub fn new() -> Self {
        Self {
            slice_size: DEFAULT_SLICE_SIZE,
        }
    }

    /// Creates a searcher with a custom slice size. A zero slice would
    /// stall the alternation, so it is clamped to one expansion.
    pub fn with_slice_size(slice_size: u64) -> Self {
        Self {
            slice_size: slice_size.max(1),
        }
    }

    /// Creates a searcher from a loaded configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_slice_size(config.slice_size)
    }

    /// Searches for a shortest move sequence from `start` to `goal`.
    ///
    /// On success the result holds every board from `start` to `goal`
    /// inclusive, consecutive entries one legal move apart; `start ==
    /// goal` yields a single-element path.
    ///
    /// # Errors
    ///
    /// [`SolveError::Incompatible`] when no move sequence can exist
    /// (checked before any search work), [`SolveError::BudgetExceeded`]
    /// when `work_budget` expansions were charged without the sides
    /// meeting.
    pub fn solve(
        &self,
        start: &Board,
        goal: &Board,
        work_budget: u64,
    ) -> Result<Vec<Board>, SolveError> {
        if !goal.is_similar(start) {
            return Err(SolveError::Incompatible(
                "start and goal differ in dimensions, stone layout, or tile counts".to_string(),
            ));
        }

        info!(
            event = "solve_start",
            height = start.height(),
            width = start.width(),
            budget = work_budget,
            slice_size = self.slice_size,
        );

        let mut forward = SideSearch::new(start.clone(), goal.clone(), self.slice_size);
        let mut backward = SideSearch::new(goal.clone(), start.clone(), self.slice_size);

        // Forward always goes first, and every slice is charged in full
        // even when a side came back early; the budget is only
        // re-checked at the top of a round.
        let mut spent: u64 = 0;
        let mut meeting: Option<(NodeId, NodeId)> = None;
        while spent < work_budget {
            if let SliceOutcome::Met(id) = forward.run_slice(backward.pool()) {
                let twin = backward
                    .pool()
                    .find(forward.node(id).board())
                    .ok_or_else(|| {
                        SolveError::Internal(
                            "meeting board missing from backward registry".to_string(),
                        )
                    })?;
                meeting = Some((id, twin));
                break;
            }
            spent += self.slice_size;

            if let SliceOutcome::Met(id) = backward.run_slice(forward.pool()) {
                let twin = forward
                    .pool()
                    .find(backward.node(id).board())
                    .ok_or_else(|| {
                        SolveError::Internal(
                            "meeting board missing from forward registry".to_string(),
                        )
                    })?;
                meeting = Some((twin, id));
                break;
            }
            spent += self.slice_size;

            debug!(
                event = "round_done",
                spent,
                forward_discovered = forward.discovered(),
                backward_discovered = backward.discovered(),
            );
        }

        let Some((forward_end, backward_end)) = meeting else {
            debug!(event = "budget_exhausted", spent);
            return Err(SolveError::BudgetExceeded {
                budget: work_budget,
            });
        };

        let path = reconstruct(&forward, forward_end, &backward, backward_end);
        info!(
            event = "solve_end",
            moves = path.len() - 1,
            spent,
            forward_discovered = forward.discovered(),
            backward_discovered = backward.discovered(),
        );
        Ok(path)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
