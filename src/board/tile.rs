//! Letter tiles.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// A letter tile on the board.
///
/// Tiles are plain values owned by the grid slot they sit in. The grid keeps
/// `position` equal to the occupied slot; relocate tiles through grid
/// methods, never by hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Current cell.
    pub position: Position,

    /// Lowercase letter `a..=z`.
    pub value: char,

    /// Score value of the letter.
    pub point: u32,

    /// Where the tile sat before the current move. Display layers use this
    /// to animate slides.
    pub previous_position: Option<Position>,

    /// Source tiles when two tiles combine. Combining is disabled in this
    /// variant; the field stays `None` and exists for actuator compatibility.
    pub merged_from: Option<[Position; 2]>,
}

impl Tile {
    /// Create a tile at `position`.
    #[must_use]
    pub fn new(position: Position, value: char, point: u32) -> Self {
        Self {
            position,
            value,
            point,
            previous_position: None,
            merged_from: None,
        }
    }

    /// Record the current position as the previous one.
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.position);
    }

    /// Update the tile's own coordinates.
    pub fn update_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Persistent form of this tile.
    #[must_use]
    pub fn serialize(&self) -> SavedTile {
        SavedTile {
            position: self.position,
            value: self.value,
            point: self.point,
        }
    }
}

/// Serialized tile: position, letter, and letter score.
///
/// Transient animation state (`previous_position`, `merged_from`) is not
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTile {
    pub position: Position,
    pub value: char,
    pub point: u32,
}

impl SavedTile {
    /// Rebuild a live tile.
    #[must_use]
    pub fn to_tile(&self) -> Tile {
        Tile::new(self.position, self.value, self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_has_no_history() {
        let tile = Tile::new(Position::new(1, 2), 'e', 1);

        assert_eq!(tile.position, Position::new(1, 2));
        assert_eq!(tile.value, 'e');
        assert_eq!(tile.point, 1);
        assert_eq!(tile.previous_position, None);
        assert_eq!(tile.merged_from, None);
    }

    #[test]
    fn test_save_and_update_position() {
        let mut tile = Tile::new(Position::new(3, 0), 'q', 10);

        tile.save_position();
        tile.update_position(Position::new(0, 0));

        assert_eq!(tile.position, Position::new(0, 0));
        assert_eq!(tile.previous_position, Some(Position::new(3, 0)));
    }

    #[test]
    fn test_serialize_drops_transient_state() {
        let mut tile = Tile::new(Position::new(2, 2), 'z', 10);
        tile.save_position();
        tile.update_position(Position::new(2, 3));

        let saved = tile.serialize();
        assert_eq!(saved.position, Position::new(2, 3));
        assert_eq!(saved.value, 'z');
        assert_eq!(saved.point, 10);

        let rebuilt = saved.to_tile();
        assert_eq!(rebuilt.previous_position, None);
        assert_eq!(rebuilt.merged_from, None);
    }

    #[test]
    fn test_saved_tile_json_shape() {
        let saved = Tile::new(Position::new(1, 0), 'e', 1).serialize();
        let json = serde_json::to_value(saved).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "position": {"x": 1, "y": 0},
                "value": "e",
                "point": 1
            })
        );
    }
}
