//! Procedural chunk content
//!
//! Each chunk gets a flat floor across all of its columns and, per column,
//! one random roll for an obstacle sitting on top of the floor.

pub mod chunk_gen;

pub use chunk_gen::{generate, ChunkGenerator};
