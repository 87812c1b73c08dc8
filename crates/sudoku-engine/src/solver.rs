use crate::Grid;

/// Backtracking Sudoku solver and bounded solution counter.
///
/// The search visits cells in row-major order and tries candidate
/// digits in ascending order, so its cost is predictable for a given
/// grid. Callers pass grids by reference; all trial placements happen
/// on an internal working copy.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Solve the grid, returning the first completion found
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if Self::fill_first(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count completions of the grid, stopping once `limit` is reached.
    ///
    /// Returns 0 for an unsolvable grid, 1 for a unique solution, and
    /// `limit` when at least `limit` distinct completions exist (the
    /// search short-circuits, so the true count may be higher).
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut count = 0;
        Self::count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Whether the grid has exactly one completion
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn fill_first(grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };
        for digit in 1..=9 {
            if grid.is_placement_valid(pos, digit) {
                grid.set(pos, digit);
                if Self::fill_first(grid) {
                    return true;
                }
                grid.clear(pos);
            }
        }
        false
    }

    // Every trial placement is undone before returning, so the working
    // grid comes back in its original state even on the early-exit path.
    fn count_recursive(grid: &mut Grid, count: &mut usize, limit: usize) {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => {
                *count += 1;
                return;
            }
        };
        for digit in 1..=9 {
            if grid.is_placement_valid(pos, digit) {
                grid.set(pos, digit);
                Self::count_recursive(grid, count, limit);
                grid.clear(pos);
                if *count >= limit {
                    return;
                }
            }
        }
    }
}
