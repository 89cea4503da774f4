//! Grid coordinates and movement vectors.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// `x` runs left to right, `y` top to bottom, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell along `vector` on a `size` x `size` board.
    ///
    /// Returns `None` when the step leaves the board, so callers never mix
    /// signed offsets with unsigned coordinates.
    #[must_use]
    pub fn offset(self, vector: Vector, size: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(vector.dx as isize)?;
        let y = self.y.checked_add_signed(vector.dy as isize)?;
        if x < size && y < size {
            Some(Self { x, y })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit movement step. Components are -1, 0, or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: i8,
    pub dy: i8,
}

impl Vector {
    /// Create a new vector.
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}
