//! Fifteen-Puzzle Demo
//!
//! Builds the canonical 4x4 goal, shuffles it into a solvable start
//! position with a seeded generator, and searches for the shortest way
//! back.
//!
//! Search parameters come from `fifteen.toml` next to the working
//! directory when present; defaults otherwise. Set `RUST_LOG` to see
//! the solver's progress events.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use tilepath_config::SearchConfig;
use tilepath_core::{Board, Cell};
use tilepath_solver::Searcher;

/// The solved 4x4 board: tiles 1..=15 with the blank last.
fn goal_board() -> Board {
    let mut cells: Vec<Cell> = (1..=15).map(Cell::Tile).collect();
    cells.push(Cell::Blank);
    Board::new(4, 4, cells).expect("the 4x4 goal dimensions are static")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SearchConfig::load("fifteen.toml").unwrap_or_default();

    let mut rng = match config.random_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let goal = goal_board();
    let start = goal.shuffled(&mut rng, config.shuffle_moves as usize);

    println!("start:\n{start}");
    println!("goal:\n{goal}");

    let searcher = Searcher::from_config(&config);
    match searcher.solve(&start, &goal, config.work_budget) {
        Ok(path) => {
            println!("solved in {} moves", path.len() - 1);
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            std::process::exit(1);
        }
    }
}
