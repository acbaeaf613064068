//! Tile surfaces owned by chunks

pub mod surface;

pub use surface::{TileGrid, TileKind, TileSurface};
