//! Tilestream - endless side-scrolling chunk streaming
//!
//! A pool of fixed-width chunks is scrolled past a viewport: chunks that
//! leave on the left are recycled, and new ones are generated on the right
//! with a flat floor and randomly placed obstacles.

pub mod core;
pub mod pool;
pub mod tile;
pub mod generation;
pub mod streaming;

pub use crate::core::{Error, OrthoCamera, Result};
pub use generation::ChunkGenerator;
pub use streaming::{ChunkStreamer, FixedViewport, StreamerConfig, TickReport, ViewportProvider};
pub use tile::{TileGrid, TileKind, TileSurface};
