//! `Position`: the (row, column) coordinates of a glass in a tower.
//!
//! Rows are numbered from the top (row 0 holds a single glass) and
//! columns from the left; row `r` has columns `0..=r`.

use std::fmt;

/// Row/column coordinates of a glass.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }

    /// First or last column of its row; such glasses have a single parent.
    #[inline]
    pub const fn is_row_boundary(self) -> bool {
        self.column == 0 || self.column == self.row
    }

    /// Whether the coordinates describe a slot of a triangular tower.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.column <= self.row
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Position::new(row, column)
    }
}

/// Prints as `(row, column)`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
