//! Board coordinates.
//!
//! Columns grow to the right, rows grow downward: `row == 0` is the top of
//! the board and `row == rows - 1` is the bottom row that gravity fills
//! first.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// ```
/// use same_game::core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.right(), Some(Position::new(3, 5)));
/// assert_eq!(pos.up(), Some(Position::new(2, 4)));
/// assert_eq!(Position::new(0, 0).left(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Neighbor one column to the right. Whether it is on the board is the
    /// grid's call.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        self.col.checked_add(1).map(|col| Self::new(col, self.row))
    }

    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self::new(col, self.row))
    }

    /// Neighbor one row towards the top of the board.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self::new(self.col, row))
    }

    /// Neighbor one row towards the bottom of the board.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        self.row.checked_add(1).map(|row| Self::new(self.col, row))
    }

    /// The four orthogonal neighbors that exist in `usize` space.
    ///
    /// Order is right, left, down, up. Diagonals are never included.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [self.right(), self.left(), self.down(), self.up()]
            .into_iter()
            .flatten()
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
