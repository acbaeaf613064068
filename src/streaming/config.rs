//! Streamer configuration
//!
//! Loaded from JSON (any missing field falls back to its default) and
//! validated once when the streamer is built. Invalid values are fatal:
//! nothing ticks with a configuration that could stall the spawn loop.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::tile::TileKind;

/// Configuration for a [`ChunkStreamer`](super::ChunkStreamer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamerConfig {
    /// World scroll speed in units per second (the runner's apparent speed)
    pub speed: f32,
    /// Width of every chunk, in tile columns
    pub chunk_width: u32,
    /// Tile row of the floor
    pub ground_height_level: i32,
    /// Chance per column of an obstacle on top of the floor
    pub obstacle_rate: f32,
    /// Warm-start hint for the chunk pool's bookkeeping
    pub pool_initial_capacity: usize,
    /// Tile placed on the floor row
    pub ground_tile: TileKind,
    /// Tile placed above the floor when an obstacle is rolled
    pub obstacle_tile: TileKind,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            chunk_width: 10,
            ground_height_level: -5,
            obstacle_rate: 0.2,
            pool_initial_capacity: 5,
            ground_tile: TileKind::Ground,
            obstacle_tile: TileKind::Obstacle,
        }
    }
}

impl StreamerConfig {
    /// Check every field and return a copy with `obstacle_rate` clamped
    /// to `[0, 1]`.
    pub fn validate(&self) -> Result<Self> {
        if self.chunk_width == 0 {
            return Err(Error::InvalidChunkWidth(self.chunk_width));
        }
        if self.chunk_width > i32::MAX as u32 {
            return Err(Error::Config(format!(
                "chunk width {} does not fit a tile column index",
                self.chunk_width
            )));
        }
        validate_speed(self.speed)?;
        if self.obstacle_rate.is_nan() {
            return Err(Error::InvalidObstacleRate(self.obstacle_rate));
        }

        let mut checked = self.clone();
        checked.obstacle_rate = self.obstacle_rate.clamp(0.0, 1.0);
        if checked.obstacle_rate != self.obstacle_rate {
            log::warn!(
                "Obstacle rate {} out of range, clamped to {}",
                self.obstacle_rate,
                checked.obstacle_rate
            );
        }
        Ok(checked)
    }

    /// Write the config as pretty JSON
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a config from JSON. The result is not validated yet.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

pub(crate) fn validate_speed(speed: f32) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSpeed(speed))
    }
}
