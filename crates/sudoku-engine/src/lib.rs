//! Sudoku puzzle engine.
//!
//! Generates playable 9x9 Sudoku puzzles: a randomized backtracking
//! search builds a fully solved grid, then cells are carved out of it
//! while a bounded solution counter verifies that exactly one valid
//! completion remains. Difficulty is a clue-count target: easy, medium,
//! and hard remove 35, 45, and 55 of the 81 cells.
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let generated = generator.generate(Difficulty::Easy).unwrap();
//!
//! assert_eq!(generated.puzzle.given_count(), 46);
//! assert!(generated.solution.is_complete());
//! assert!(Solver::new().has_unique_solution(&generated.puzzle));
//! ```
//!
//! Generation is synchronous and CPU-bound; callers that need bounded
//! latency (an interactive UI, say) should run it off their hot thread.

mod generator;
mod grid;
mod solver;

pub use generator::{
    Difficulty, GenerateError, Generator, GeneratorConfig, ParseDifficultyError, Puzzle,
};
pub use grid::{Grid, ParseGridError, Position};
pub use solver::Solver;
