//! End-to-end searches over small and shuffled puzzles.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tilepath_core::Cell::{Blank, Stone, Tile};
use tilepath_core::{Board, Cell};

use crate::{Searcher, SolveError};

fn board(rows: Vec<Vec<Cell>>) -> Board {
    Board::from_rows(rows).expect("test board is well formed")
}

/// The canonical solved 4x4 board: tiles 1..=15 and a blank last.
fn fifteen_goal() -> Board {
    let mut cells: Vec<Cell> = (1..=15).map(Tile).collect();
    cells.push(Blank);
    Board::new(4, 4, cells).expect("static dimensions")
}

fn assert_valid_path(path: &[Board], start: &Board, goal: &Board) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    for pair in path.windows(2) {
        let legal = pair[0]
            .possible_moves()
            .iter()
            .any(|mv| pair[0].swapped(mv.from, mv.to) == pair[1]);
        assert!(
            legal,
            "consecutive boards differ by more than one legal move:\n{}\n{}",
            pair[0], pair[1]
        );
    }
}

#[test]
fn test_single_move_puzzle() {
    let goal = board(vec![vec![Tile(1), Tile(2)], vec![Tile(3), Blank]]);
    let start = board(vec![vec![Tile(1), Tile(2)], vec![Blank, Tile(3)]]);
    let path = Searcher::new().solve(&start, &goal, 100_000).unwrap();
    assert_eq!(path, vec![start, goal]);
}

#[test]
fn test_start_equal_to_goal() {
    let goal = fifteen_goal();
    let path = Searcher::new().solve(&goal, &goal, 100_000).unwrap();
    assert_eq!(path, vec![goal]);
}

#[test]
fn test_mismatched_stones_fail_before_searching() {
    let start = board(vec![vec![Stone, Blank], vec![Tile(1), Tile(2)]]);
    let goal = board(vec![vec![Blank, Stone], vec![Tile(1), Tile(2)]]);
    // A zero budget proves the precondition fires before any slice runs.
    let result = Searcher::new().solve(&start, &goal, 0);
    assert!(matches!(result, Err(SolveError::Incompatible(_))));
}

#[test]
fn test_mismatched_dimensions_fail() {
    let start = board(vec![vec![Blank, Tile(1)]]);
    let goal = board(vec![vec![Blank], vec![Tile(1)]]);
    let result = Searcher::new().solve(&start, &goal, 100_000);
    assert!(matches!(result, Err(SolveError::Incompatible(_))));
}

#[test]
fn test_mismatched_tile_multiset_fails() {
    let start = board(vec![vec![Blank, Tile(1)], vec![Tile(1), Tile(2)]]);
    let goal = board(vec![vec![Blank, Tile(1)], vec![Tile(2), Tile(2)]]);
    let result = Searcher::new().solve(&start, &goal, 100_000);
    assert!(matches!(result, Err(SolveError::Incompatible(_))));
}

#[test]
fn test_zero_budget_fails_cleanly() {
    let goal = fifteen_goal();
    let start = goal.swapped(15, 14);
    let result = Searcher::new().solve(&start, &goal, 0);
    assert!(matches!(
        result,
        Err(SolveError::BudgetExceeded { budget: 0 })
    ));
}

#[test]
fn test_tiny_budget_with_tiny_slices_gives_up() {
    let goal = fifteen_goal();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let start = goal.shuffled(&mut rng, 200);
    // Four expansions total cannot reach across a 200-move shuffle.
    let result = Searcher::with_slice_size(1).solve(&start, &goal, 4);
    assert!(matches!(result, Err(SolveError::BudgetExceeded { .. })));
}

#[test]
fn test_unsolvable_parity_exhausts_budget() {
    // Swapping two tiles flips permutation parity: similar, but no move
    // sequence connects the two. Both frontiers drain and the driver
    // keeps charging slices until the budget settles it.
    let goal = board(vec![vec![Tile(1), Tile(2)], vec![Tile(3), Blank]]);
    let start = board(vec![vec![Tile(2), Tile(1)], vec![Tile(3), Blank]]);
    let result = Searcher::with_slice_size(100).solve(&start, &goal, 1_000);
    assert!(matches!(result, Err(SolveError::BudgetExceeded { .. })));
}

#[test]
fn test_shuffled_fifteen_puzzle() {
    let goal = fifteen_goal();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let start = goal.shuffled(&mut rng, 60);
    let path = Searcher::new()
        .solve(&start, &goal, 1_000_000)
        .expect("a shuffled board is always solvable");
    assert_valid_path(&path, &start, &goal);
}

#[test]
fn test_shuffled_board_with_stones() {
    let goal = board(vec![
        vec![Tile(1), Tile(2), Tile(3)],
        vec![Tile(4), Stone, Tile(5)],
        vec![Tile(6), Tile(7), Blank],
    ]);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let start = goal.shuffled(&mut rng, 40);
    let path = Searcher::new()
        .solve(&start, &goal, 1_000_000)
        .expect("a shuffled board is always solvable");
    assert_valid_path(&path, &start, &goal);
    // The stone never moved.
    for step in &path {
        assert_eq!(step.get_at(1, 1), Stone);
    }
}

#[test]
fn test_duplicate_tile_ids_are_interchangeable() {
    // Two tiles share an id, so several goal arrangements coincide; the
    // heuristic must take the nearest occurrence rather than assuming
    // unique positions.
    let goal = board(vec![vec![Tile(5), Tile(5)], vec![Tile(1), Blank]]);
    let start = board(vec![vec![Tile(5), Tile(1)], vec![Tile(5), Blank]]);
    let path = Searcher::new()
        .solve(&start, &goal, 100_000)
        .expect("duplicate-id puzzle is solvable");
    assert_valid_path(&path, &start, &goal);
}

#[test]
fn test_path_is_shortest_for_known_distance() {
    let goal = board(vec![
        vec![Tile(1), Tile(2), Tile(3)],
        vec![Tile(4), Tile(5), Tile(6)],
        vec![Tile(7), Tile(8), Blank],
    ]);
    // Two blank slides: no shorter route exists.
    let start = goal.swapped(8, 7).swapped(7, 6);
    let path = Searcher::new().solve(&start, &goal, 100_000).unwrap();
    assert_eq!(path.len(), 3);
    assert_valid_path(&path, &start, &goal);
}

#[test]
fn test_small_slices_still_find_the_answer() {
    let goal = fifteen_goal();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let start = goal.shuffled(&mut rng, 30);
    let fine = Searcher::with_slice_size(50)
        .solve(&start, &goal, 1_000_000)
        .expect("solvable with interleaved slices");
    let coarse = Searcher::new()
        .solve(&start, &goal, 1_000_000)
        .expect("solvable in one slice");
    assert_valid_path(&fine, &start, &goal);
    assert_valid_path(&coarse, &start, &goal);
}
