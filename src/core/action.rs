//! Directional input: the four slide directions and the event contract.
//!
//! Directions use the classic numbering 0=up, 1=right, 2=down, 3=left so
//! serialized inputs and replays stay stable. `Direction::from_u8` is the
//! boundary check: out-of-range values are rejected, never clamped.

use serde::{Deserialize, Serialize};

use super::position::Vector;

/// One of the four slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions, in numbering order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Decode a direction from its wire value.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }

    /// The unit vector tiles travel along for this direction.
    #[must_use]
    pub const fn vector(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0, -1),
            Direction::Right => Vector::new(1, 0),
            Direction::Down => Vector::new(0, 1),
            Direction::Left => Vector::new(-1, 0),
        }
    }
}

/// Input events the engine consumes.
///
/// Delivery is ordered and non-overlapping: each event resolves completely
/// before the next is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Slide all tiles in a direction.
    Move(Direction),
    /// Abandon the current game and start a fresh one.
    Restart,
    /// Dismiss the terminal message and keep going.
    KeepPlaying,
}
