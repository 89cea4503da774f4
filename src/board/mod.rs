//! Board state: the tile arena and the tiles on it.

pub mod grid;
pub mod tile;

pub use grid::{Grid, SavedGrid};
pub use tile::{SavedTile, Tile};
