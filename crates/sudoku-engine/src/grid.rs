use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A cell coordinate on the 9x9 grid, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }

    /// Top-left corner of the 3x3 box containing this position
    pub fn box_origin(&self) -> Position {
        Position::new(self.row / 3 * 3, self.col / 3 * 3)
    }
}

/// Error parsing a grid from its 81-character line form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("expected 81 cells, got {0}")]
    WrongLength(usize),
    #[error("invalid cell character {0:?}")]
    InvalidCharacter(char),
}

/// A 9x9 Sudoku grid. Cells hold 0 (empty) or a digit 1-9.
///
/// Serializes as nine rows of nine integers, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Create a grid from raw rows. Values must be 0-9.
    pub fn from_rows(cells: [[u8; 9]; 9]) -> Self {
        debug_assert!(cells.iter().flatten().all(|&c| c <= 9));
        Self { cells }
    }

    /// The raw cell matrix, row-major
    pub fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Get the digit at a position, or `None` if the cell is empty
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            digit => Some(digit),
        }
    }

    /// Place a digit (1-9) at a position
    pub fn set(&mut self, pos: Position, digit: u8) {
        debug_assert!((1..=9).contains(&digit));
        self.cells[pos.row][pos.col] = digit;
    }

    /// Clear the cell at a position
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Whether the cell at a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    /// First empty cell in row-major order, if any
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_empty(pos))
    }

    /// Number of filled (nonzero) cells
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != 0).count()
    }

    /// Whether every cell is filled
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != 0)
    }

    /// Whether placing `digit` at `pos` would keep the grid consistent.
    ///
    /// True when `digit` appears nowhere in the position's row, column,
    /// or 3x3 box. Scans all three in lockstep; never mutates the grid.
    /// The cell itself counts as part of its row, so callers test
    /// candidate digits against empty cells.
    pub fn is_placement_valid(&self, pos: Position, digit: u8) -> bool {
        let origin = pos.box_origin();
        for i in 0..9 {
            if self.cells[pos.row][i] == digit || self.cells[i][pos.col] == digit {
                return false;
            }
            if self.cells[origin.row + i / 3][origin.col + i % 3] == digit {
                return false;
            }
        }
        true
    }

    /// Whether no digit repeats within any row, column, or box.
    ///
    /// Empty cells are ignored, so a partially filled grid can be valid.
    pub fn is_valid(&self) -> bool {
        let mut rows = [0u16; 9];
        let mut cols = [0u16; 9];
        let mut boxes = [0u16; 9];
        for pos in Position::all() {
            if let Some(digit) = self.get(pos) {
                let bit = 1u16 << digit;
                let bx = pos.row / 3 * 3 + pos.col / 3;
                if rows[pos.row] & bit != 0 || cols[pos.col] & bit != 0 || boxes[bx] & bit != 0 {
                    return false;
                }
                rows[pos.row] |= bit;
                cols[pos.col] |= bit;
                boxes[bx] |= bit;
            }
        }
        true
    }

    /// Compact 81-character form, row-major, `0` for empty cells
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&c| char::from(b'0' + c))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse the 81-character line form. `0` and `.` both mean empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != 81 {
            return Err(ParseGridError::WrongLength(count));
        }
        let mut grid = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            let value = match ch {
                '0' | '.' => 0,
                '1'..='9' => ch as u8 - b'0',
                other => return Err(ParseGridError::InvalidCharacter(other)),
            };
            grid.cells[i / 9][i % 9] = value;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                    if col % 3 == 0 {
                        write!(f, "| ")?;
                    }
                }
                match cell {
                    0 => write!(f, ".")?,
                    digit => write!(f, "{}", digit)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
