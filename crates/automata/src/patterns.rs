//! Named boolean matrices for stamping into a Game of Life grid.
//!
//! Patterns are written as row strings where `'O'` marks a live cell and
//! anything else is dead. Ragged rows are padded with dead cells.

use morphogen_core::GenError;

/// A rectangular boolean matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Parses a pattern from row strings: `'O'` is alive, anything else
    /// dead. Width is the longest row; shorter rows are padded dead.
    /// An empty row list produces an empty (0×0) pattern.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                cells[y * width + x] = symbol == 'O';
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Pattern width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pattern height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at (x, y), or dead if out of range.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// All recognized pattern names.
const PATTERN_NAMES: &[&str] = &[
    "block",
    "blinker",
    "glider",
    "toad",
    "beacon",
    "r-pentomino",
    "lwss",
];

/// Returns a slice of all recognized pattern names.
pub fn list_patterns() -> &'static [&'static str] {
    PATTERN_NAMES
}

/// Looks up a pattern by name.
///
/// Returns `GenError::UnknownPattern` for unrecognized names.
pub fn from_name(name: &str) -> Result<Pattern, GenError> {
    match name {
        "block" => Ok(Pattern::from_rows(&["OO", "OO"])),
        "blinker" => Ok(Pattern::from_rows(&["OOO"])),
        "glider" => Ok(Pattern::from_rows(&[".O.", "..O", "OOO"])),
        "toad" => Ok(Pattern::from_rows(&[".OOO", "OOO."])),
        "beacon" => Ok(Pattern::from_rows(&["OO..", "OO..", "..OO", "..OO"])),
        "r-pentomino" => Ok(Pattern::from_rows(&[".OO", "OO.", ".O."])),
        "lwss" => Ok(Pattern::from_rows(&[".O..O", "O....", "O...O", "OOOO."])),
        _ => Err(GenError::UnknownPattern(name.to_string())),
    }
}
