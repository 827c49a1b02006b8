//! Linear tile numbering for square boards.
//!
//! Cells are stored flat in row-major order but addressed by players as
//! 1-based tile numbers, the way they are printed on the field. For an n×n
//! board, tile `t` sits at `col = (t-1) mod n`, `row = (t-1-col)/n`; the
//! inverse mapping round-trips exactly for every valid tile.

use serde::{Deserialize, Serialize};

/// 1-based linear index of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile(pub usize);

impl Tile {
    /// Tile at a 0-based (row, col) position on an n×n board.
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize, n: usize) -> Self {
        Self(row * n + col + 1)
    }

    /// 0-based column on an n×n board.
    #[must_use]
    pub const fn col(self, n: usize) -> usize {
        (self.0 - 1) % n
    }

    /// 0-based row on an n×n board.
    #[must_use]
    pub const fn row(self, n: usize) -> usize {
        (self.0 - 1 - self.col(n)) / n
    }

    /// Whether this tile exists on an n×n board.
    #[must_use]
    pub const fn is_valid(self, n: usize) -> bool {
        self.0 >= 1 && self.0 <= n * n
    }

    /// 0-based position in the flat cell vector.
    #[must_use]
    pub const fn flat_index(self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
