//! Rectangular sliding-tile board state.
//!
//! A [`Board`] is a value type: equality, hashing, and a strict total
//! order are defined over dimensions plus cell contents, and every
//! mutation is observable as a logically new value. The search engine
//! keys its registries and frontier tie-breaks on that order.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::BoardError;
use crate::moves::Move;

/// Legal moves from one position. A single blank has at most four.
pub type MoveList = SmallVec<[Move; 4]>;

/// A `height x width` grid of [`Cell`]s stored row-major.
///
/// Dimensions are fixed for the lifetime of the instance. The derived
/// order compares height, then width, then cells lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board from a flat row-major cell vector.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyGrid`] for zero dimensions and
    /// [`BoardError::CellCountMismatch`] when `cells` does not hold
    /// exactly `height * width` entries.
    pub fn new(height: usize, width: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyGrid);
        }
        let expected = height * width;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Creates a board from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyGrid`] when there are no rows or the
    /// first row is empty, and [`BoardError::RaggedRows`] when a later
    /// row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(height * width);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a board with no cells. Construction forbids
    /// this, so it only exists to pair with [`Board::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at a flat row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get_at(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Replaces the cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Replaces the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_at(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = cell;
    }

    /// Enumerates all legal moves: swaps of a blank with an adjacent
    /// tile. Stones and other blanks are never swap targets.
    ///
    /// The order is deterministic for a given board: blanks in cell-scan
    /// order, neighbors up, right, down, left.
    pub fn possible_moves(&self) -> MoveList {
        let mut result = MoveList::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell != Cell::Blank {
                continue;
            }
            if index >= self.width {
                self.push_if_tile(&mut result, index, index - self.width);
            }
            if (index + 1) % self.width != 0 {
                self.push_if_tile(&mut result, index, index + 1);
            }
            if index + self.width < self.cells.len() {
                self.push_if_tile(&mut result, index, index + self.width);
            }
            if index % self.width != 0 {
                self.push_if_tile(&mut result, index, index - 1);
            }
        }
        result
    }

    fn push_if_tile(&self, out: &mut MoveList, from: usize, to: usize) {
        if self.cells[to].is_tile() {
            out.push(Move::new(from, to));
        }
    }

    /// Swaps two cells in place. Applying the same move again restores
    /// the previous board.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, from: usize, to: usize) {
        self.cells.swap(from, to);
    }

    /// Returns a copy of this board with two cells swapped.
    pub fn swapped(&self, from: usize, to: usize) -> Board {
        let mut result = self.clone();
        result.swap(from, to);
        result
    }

    /// Checks whether `other` can possibly be reached from this board:
    /// matching dimensions, every stone of `self` also a stone of
    /// `other` at the same index, and matching multisets of cell values
    /// (blanks included).
    pub fn is_similar(&self, other: &Board) -> bool {
        if self.height != other.height || self.width != other.width {
            return false;
        }
        let mut counter: HashMap<Cell, i64> = HashMap::new();
        for (mine, theirs) in self.cells.iter().zip(other.cells.iter()) {
            if *mine == Cell::Stone && *theirs != Cell::Stone {
                return false;
            }
            *counter.entry(*mine).or_insert(0) += 1;
            *counter.entry(*theirs).or_insert(0) -= 1;
        }
        counter.values().all(|&count| count == 0)
    }

    /// Heuristic estimate of the move count to reach `target`: for each
    /// tile, the minimum Manhattan distance to any cell of `target`
    /// holding the same id, summed. Blanks and stones contribute zero,
    /// as does a tile with no occurrence in the target.
    ///
    /// Admissible under unit-cost moves whenever the two boards hold the
    /// same tile multiset.
    pub fn distance(&self, target: &Board) -> u32 {
        debug_assert!(self.height == target.height && self.width == target.width);
        let mut occurrences: HashMap<u32, Vec<usize>> = HashMap::new();
        for (index, &cell) in target.cells.iter().enumerate() {
            if let Cell::Tile(id) = cell {
                occurrences.entry(id).or_default().push(index);
            }
        }
        let mut result = 0;
        for (from, &cell) in self.cells.iter().enumerate() {
            let Cell::Tile(id) = cell else {
                continue;
            };
            let nearest = occurrences
                .get(&id)
                .into_iter()
                .flatten()
                .map(|&to| self.manhattan(from, to))
                .min();
            result += nearest.unwrap_or(0);
        }
        result
    }

    /// Incremental form of [`Board::distance`], called on the board
    /// *after* `mv` was applied with the pre-move value in `previous`.
    ///
    /// Only the moved tile's contribution is re-derived (the blank
    /// contributes nothing), which makes this O(cells) instead of
    /// O(cells^2). The result equals a full recomputation exactly.
    pub fn update_distance(&self, target: &Board, previous: u32, mv: Move) -> u32 {
        debug_assert!(self.height == target.height && self.width == target.width);
        let (id, old_from, new_from) = match self.cells[mv.to] {
            Cell::Tile(id) => (id, mv.from, mv.to),
            _ => {
                let Cell::Tile(id) = self.cells[mv.from] else {
                    // A legal move always leaves the tile on one end.
                    debug_assert!(false, "move touched no tile");
                    return previous;
                };
                (id, mv.to, mv.from)
            }
        };
        let mut old_part: Option<u32> = None;
        let mut new_part: Option<u32> = None;
        for (index, &cell) in target.cells.iter().enumerate() {
            if cell != Cell::Tile(id) {
                continue;
            }
            let to_old = self.manhattan(old_from, index);
            let to_new = self.manhattan(new_from, index);
            old_part = Some(old_part.map_or(to_old, |best| best.min(to_old)));
            new_part = Some(new_part.map_or(to_new, |best| best.min(to_new)));
        }
        let old_part = old_part.unwrap_or(0);
        let new_part = new_part.unwrap_or(0);
        debug_assert!(previous >= old_part);
        previous - old_part + new_part
    }

    #[inline]
    fn manhattan(&self, from: usize, to: usize) -> u32 {
        let cols = (from % self.width).abs_diff(to % self.width);
        let rows = (from / self.width).abs_diff(to / self.width);
        (cols + rows) as u32
    }

    /// Applies `move_count` uniformly random legal moves, stopping early
    /// if the board has none. Shuffling a solved board yields a start
    /// position a search is guaranteed to solve.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, move_count: usize) {
        for _ in 0..move_count {
            let moves = self.possible_moves();
            if moves.is_empty() {
                return;
            }
            let mv = moves[rng.random_range(0..moves.len())];
            self.swap(mv.from, mv.to);
        }
    }

    /// Returns a shuffled copy of this board.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R, move_count: usize) -> Board {
        let mut result = self.clone();
        result.shuffle(rng, move_count);
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
