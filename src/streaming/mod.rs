//! Endless chunk streaming
//!
//! - [`ChunkStreamer`]: scrolls the world, recycles and spawns chunks
//! - [`Chunk`]: fixed-width world segment owned by the streamer's pool
//! - [`ViewportProvider`]: where the screen edges are this frame
//! - [`StreamerConfig`]: validated construction parameters

pub mod chunk;
pub mod config;
pub mod streamer;
pub mod viewport;

pub use chunk::{Chunk, ChunkLifecycle};
pub use config::StreamerConfig;
pub use streamer::{ChunkStreamer, PoolStats, TickReport};
pub use viewport::{FixedViewport, ViewportProvider};
