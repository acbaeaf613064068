//! Tile surface capability and a sparse grid implementation
//!
//! The generator only ever talks to a chunk through [`TileSurface`], so a
//! host can plug in its own tilemap (GPU atlas, terminal renderer, recorder)
//! without the streaming code knowing about it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::IVec2;

/// Kind of tile placed on a chunk surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Walkable floor
    Ground,
    /// Something the runner has to jump over
    Obstacle,
}

/// Write-side of a chunk's tilemap.
///
/// Coordinates are chunk-local: `column` in `[0, chunk_width)`, `row` is the
/// world tile row (may be negative).
pub trait TileSurface {
    /// Remove every tile
    fn clear(&mut self);

    /// Place `kind` at (`column`, `row`), replacing whatever was there
    fn set_tile(&mut self, column: i32, row: i32, kind: TileKind);
}

/// Sparse tile grid keyed by (column, row).
///
/// `clear` keeps the map's allocation, so a recycled chunk refills without
/// touching the allocator once it has been generated once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileGrid {
    tiles: HashMap<IVec2, TileKind>,
}

impl TileGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile at (`column`, `row`), if any
    pub fn get(&self, column: i32, row: i32) -> Option<TileKind> {
        self.tiles.get(&IVec2::new(column, row)).copied()
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Count tiles of the given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.values().filter(|&&k| k == kind).count()
    }

    /// Iterate over occupied cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, TileKind)> + '_ {
        self.tiles.iter().map(|(&pos, &kind)| (pos, kind))
    }
}

impl TileSurface for TileGrid {
    fn clear(&mut self) {
        self.tiles.clear();
    }

    fn set_tile(&mut self, column: i32, row: i32, kind: TileKind) {
        self.tiles.insert(IVec2::new(column, row), kind);
    }
}
