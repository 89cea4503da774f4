//! The board: a square arena of optional letter tiles.
//!
//! Cells are stored flat, indexed `x * size + y`, so the outer axis is `x`
//! exactly like the serialized form. Every mutation that relocates a tile
//! goes through the grid, which updates the slot and the tile's own
//! coordinates together; the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::board::tile::{SavedTile, Tile};
use crate::core::{GameRng, Position};

/// Square board of optional tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Rebuild a grid from its serialized form.
    #[must_use]
    pub fn from_saved(saved: &SavedGrid) -> Self {
        let mut grid = Self::new(saved.size);
        for column in &saved.cells {
            for cell in column.iter().flatten() {
                grid.insert_tile(cell.to_tile());
            }
        }
        grid
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, position: Position) -> usize {
        position.x * self.size + position.y
    }

    /// Is `position` on the board?
    #[must_use]
    pub fn within_bounds(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Tile at `position`, if any. `None` for out-of-bounds positions.
    #[must_use]
    pub fn cell_content(&self, position: Position) -> Option<&Tile> {
        if self.within_bounds(position) {
            self.cells[self.index(position)].as_ref()
        } else {
            None
        }
    }

    /// Is the cell on the board and empty?
    #[must_use]
    pub fn cell_available(&self, position: Position) -> bool {
        self.within_bounds(position) && self.cells[self.index(position)].is_none()
    }

    /// Is the cell occupied?
    #[must_use]
    pub fn cell_occupied(&self, position: Position) -> bool {
        self.cell_content(position).is_some()
    }

    /// Are any cells empty?
    #[must_use]
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// All empty cells, in array order.
    #[must_use]
    pub fn available_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        self.each_cell(|x, y, tile| {
            if tile.is_none() {
                cells.push(Position::new(x, y));
            }
        });
        cells
    }

    /// A uniformly random empty cell, or `None` when the board is full.
    #[must_use]
    pub fn random_available_cell(&self, rng: &mut GameRng) -> Option<Position> {
        let cells = self.available_cells();
        rng.choose(&cells).copied()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Place a tile at its own position.
    ///
    /// Panics if the slot is occupied or off the board; both are caller bugs.
    pub fn insert_tile(&mut self, tile: Tile) {
        assert!(
            self.within_bounds(tile.position),
            "Tile position {} outside {}x{} grid",
            tile.position,
            self.size,
            self.size
        );
        let idx = self.index(tile.position);
        assert!(
            self.cells[idx].is_none(),
            "Cell {} already occupied",
            tile.position
        );
        self.cells[idx] = Some(tile);
    }

    /// Remove and return the tile at `position`.
    pub fn remove_tile(&mut self, position: Position) -> Option<Tile> {
        if !self.within_bounds(position) {
            return None;
        }
        let idx = self.index(position);
        self.cells[idx].take()
    }

    /// Relocate the tile at `from` to the empty cell `to`.
    ///
    /// Slot and tile coordinates change in one step. No-op when `from` is
    /// empty or equals `to`; panics if `to` is occupied.
    pub fn move_tile(&mut self, from: Position, to: Position) {
        if from == to {
            return;
        }
        if let Some(mut tile) = self.remove_tile(from) {
            tile.update_position(to);
            self.insert_tile(tile);
        }
    }

    /// Visit every cell in array order (`x` outer, `y` inner).
    pub fn each_cell<F: FnMut(usize, usize, Option<&Tile>)>(&self, mut visitor: F) {
        for x in 0..self.size {
            for y in 0..self.size {
                visitor(x, y, self.cells[x * self.size + y].as_ref());
            }
        }
    }

    /// Visit every tile mutably. Used to reset per-move transient state.
    pub fn for_each_tile_mut<F: FnMut(&mut Tile)>(&mut self, mut f: F) {
        for cell in self.cells.iter_mut().flatten() {
            f(cell);
        }
    }

    /// Persistent form of the grid: an `x`-major matrix of optional tiles.
    #[must_use]
    pub fn serialize(&self) -> SavedGrid {
        let mut cells = Vec::with_capacity(self.size);
        for x in 0..self.size {
            let mut column = Vec::with_capacity(self.size);
            for y in 0..self.size {
                column.push(self.cells[x * self.size + y].as_ref().map(Tile::serialize));
            }
            cells.push(column);
        }
        SavedGrid {
            size: self.size,
            cells,
        }
    }
}

/// Serialized grid: side length plus the sparse cell matrix (outer index `x`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGrid {
    pub size: usize,
    pub cells: Vec<Vec<Option<SavedTile>>>,
}
