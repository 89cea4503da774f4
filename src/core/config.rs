//! Game configuration.
//!
//! One plain struct with builder methods. The defaults are the shipping
//! rules: a 4x4 board, 5 starting tiles, 33% spawn chance per move.

use serde::{Deserialize, Serialize};

/// Tunable rules for a game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    pub size: usize,

    /// Tiles spawned when a fresh game begins.
    pub start_tiles: usize,

    /// Probability that a successful move spawns a new tile.
    pub spawn_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            start_tiles: 5,
            spawn_chance: 0.33,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `size` x `size` board.
    ///
    /// Panics if the board cannot host a game (`size < 2`).
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Board size must be at least 2");
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the number of starting tiles.
    ///
    /// Panics if they cannot all fit on the board.
    #[must_use]
    pub fn with_start_tiles(mut self, count: usize) -> Self {
        assert!(
            count <= self.size * self.size,
            "Start tiles must fit on the board"
        );
        self.start_tiles = count;
        self
    }

    /// Set the per-move spawn probability.
    ///
    /// Panics unless `0.0 <= chance <= 1.0`.
    #[must_use]
    pub fn with_spawn_chance(mut self, chance: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&chance),
            "Spawn chance must be in [0, 1]"
        );
        self.spawn_chance = chance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.size, 4);
        assert_eq!(config.start_tiles, 5);
        assert!((config.spawn_chance - 0.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(5)
            .with_start_tiles(3)
            .with_spawn_chance(1.0);

        assert_eq!(config.size, 5);
        assert_eq!(config.start_tiles, 3);
        assert!((config.spawn_chance - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 2")]
    fn test_rejects_tiny_board() {
        GameConfig::new(1);
    }

    #[test]
    #[should_panic(expected = "Start tiles must fit on the board")]
    fn test_rejects_too_many_start_tiles() {
        let _ = GameConfig::new(2).with_start_tiles(5);
    }

    #[test]
    #[should_panic(expected = "Spawn chance must be in [0, 1]")]
    fn test_rejects_bad_spawn_chance() {
        let _ = GameConfig::default().with_spawn_chance(1.5);
    }
}
