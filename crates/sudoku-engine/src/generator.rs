use crate::{Grid, Position, Solver};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty level of a generated puzzle.
///
/// Difficulty is approximated purely by how many cells are carved out
/// of the solved grid; fewer givens means a harder puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Number of cells carved out of the 81-cell solved grid
    pub fn removal_target(&self) -> usize {
        match self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
        }
    }

    /// Number of givens left in the puzzle
    pub fn clue_count(&self) -> usize {
        81 - self.removal_target()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Error parsing a difficulty label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?}, expected easy, medium, or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

/// A generated puzzle paired with its unique solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The playable grid; nonzero cells are the givens
    pub puzzle: Grid,
    /// The full solved grid the puzzle was carved from
    pub solution: Grid,
}

/// Error produced when generation exhausts its attempt budget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("could not carve {} cells for a {difficulty} puzzle in {attempts} attempts", .difficulty.removal_target())]
    RemovalTargetUnreached {
        difficulty: Difficulty,
        attempts: usize,
    },
}

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Carve passes to try per `generate` call before giving up. One
    /// pass tries each of the 81 cells at most once, so total work per
    /// call is capped.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_attempts: 50 }
    }
}

/// Sudoku puzzle generator.
///
/// Owns a seedable random number generator; two generators built with
/// the same seed produce identical puzzle sequences.
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config: GeneratorConfig::default(),
        }
    }

    /// Generate a puzzle with a guaranteed unique solution.
    ///
    /// Produces a fresh solved grid, then carves the difficulty's
    /// removal target out of it, keeping each removal only if the
    /// puzzle still has exactly one solution. A carve pass that stalls
    /// short of the target is discarded and generation restarts from a
    /// new solved grid, up to a fixed attempt budget.
    pub fn generate(&mut self, difficulty: Difficulty) -> Result<Puzzle, GenerateError> {
        let target = difficulty.removal_target();
        for _ in 0..self.config.max_attempts {
            let solution = self.generate_full_grid();
            if let Some(puzzle) = self.carve(&solution, target) {
                return Ok(Puzzle { puzzle, solution });
            }
        }
        Err(GenerateError::RemovalTargetUnreached {
            difficulty,
            attempts: self.config.max_attempts,
        })
    }

    /// Generate a complete, randomized, valid grid.
    ///
    /// Randomized depth-first backtracking over cells in row-major
    /// order; always succeeds for the 9x9 ruleset since a solution is
    /// reachable from every prefix the search can build.
    pub fn generate_full_grid(&mut self) -> Grid {
        let mut grid = Grid::empty();
        let filled = self.fill_cells(&mut grid);
        debug_assert!(filled);
        grid
    }

    fn fill_cells(&mut self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };
        // Fresh shuffle at every cell so each run lands on a
        // different grid with high probability.
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut self.rng);
        for &digit in &digits {
            if grid.is_placement_valid(pos, digit) {
                grid.set(pos, digit);
                if self.fill_cells(grid) {
                    return true;
                }
                grid.clear(pos);
            }
        }
        false
    }

    /// One carve pass: clear cells in random order, reverting any
    /// removal that breaks uniqueness, until `target` cells are gone.
    /// Returns `None` if the pass runs out of removable cells first.
    fn carve(&mut self, solution: &Grid, target: usize) -> Option<Grid> {
        let solver = Solver::new();
        let mut puzzle = solution.clone();
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in positions {
            if removed == target {
                break;
            }
            let digit = match puzzle.get(pos) {
                Some(digit) => digit,
                None => continue,
            };
            puzzle.clear(pos);
            if solver.count_solutions(&puzzle, 2) == 1 {
                removed += 1;
            } else {
                puzzle.set(pos, digit);
            }
        }
        (removed == target).then_some(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(puzzle: &Puzzle, difficulty: Difficulty) {
        assert!(puzzle.solution.is_complete());
        assert!(puzzle.solution.is_valid());
        assert_eq!(puzzle.puzzle.given_count(), difficulty.clue_count());

        // Every given matches the solution.
        for pos in Position::all() {
            if let Some(digit) = puzzle.puzzle.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }

        assert!(Solver::new().has_unique_solution(&puzzle.puzzle));
    }

    #[test]
    fn generates_easy_puzzle() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(Difficulty::Easy).unwrap();
        assert_eq!(puzzle.puzzle.given_count(), 46);
        assert_well_formed(&puzzle, Difficulty::Easy);
    }

    #[test]
    fn generates_medium_puzzle() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.generate(Difficulty::Medium).unwrap();
        assert_well_formed(&puzzle, Difficulty::Medium);
    }

    #[test]
    fn generates_hard_puzzle() {
        let mut generator = Generator::with_seed(7);
        let puzzle = generator.generate(Difficulty::Hard).unwrap();
        assert_well_formed(&puzzle, Difficulty::Hard);
    }

    #[test]
    fn full_grid_is_complete_and_valid() {
        let mut generator = Generator::with_seed(1);
        let grid = generator.generate_full_grid();
        assert!(grid.is_complete());
        assert!(grid.is_valid());
    }

    #[test]
    fn full_grids_vary_between_calls() {
        let mut generator = Generator::with_seed(1);
        let first = generator.generate_full_grid();
        let second = generator.generate_full_grid();
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_reproduces_puzzle() {
        let first = Generator::with_seed(99).generate(Difficulty::Easy).unwrap();
        let second = Generator::with_seed(99).generate(Difficulty::Easy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn exhausted_attempt_budget_reports_failure() {
        let mut generator = Generator::with_config(GeneratorConfig { max_attempts: 0 });
        let err = generator.generate(Difficulty::Hard).unwrap_err();
        assert_eq!(
            err,
            GenerateError::RemovalTargetUnreached {
                difficulty: Difficulty::Hard,
                attempts: 0,
            }
        );
        assert!(err.to_string().contains("55 cells"));
        assert!(err.to_string().contains("hard"));
    }

    #[test]
    fn difficulty_labels_round_trip() {
        for &difficulty in Difficulty::all_levels() {
            let label = difficulty.to_string();
            assert_eq!(label.parse::<Difficulty>().unwrap(), difficulty);
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{}\"", label));
        }
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn removal_targets_match_clue_counts() {
        assert_eq!(Difficulty::Easy.removal_target(), 35);
        assert_eq!(Difficulty::Medium.removal_target(), 45);
        assert_eq!(Difficulty::Hard.removal_target(), 55);
        assert_eq!(Difficulty::Easy.clue_count(), 46);
        assert_eq!(Difficulty::Medium.clue_count(), 36);
        assert_eq!(Difficulty::Hard.clue_count(), 26);
    }

    #[test]
    fn puzzle_serializes_as_nested_grids() {
        let puzzle = Generator::with_seed(3).generate(Difficulty::Easy).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert!(json.starts_with("{\"puzzle\":[["));

        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);
    }
}
