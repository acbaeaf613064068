//! Floor-and-obstacle tile generator

use rand::Rng;

use crate::streaming::{Chunk, StreamerConfig};
use crate::tile::{TileKind, TileSurface};

/// Fills chunk surfaces with a floor row and random obstacles.
///
/// Holds only configuration; all randomness comes from the caller's source,
/// so the same seed always produces the same chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkGenerator {
    ground_height_level: i32,
    obstacle_rate: f32,
    ground_tile: TileKind,
    obstacle_tile: TileKind,
}

impl ChunkGenerator {
    /// Create a generator; `obstacle_rate` is clamped to `[0, 1]`
    pub fn new(ground_height_level: i32, obstacle_rate: f32) -> Self {
        Self {
            ground_height_level,
            obstacle_rate: clamp_rate(obstacle_rate),
            ground_tile: TileKind::Ground,
            obstacle_tile: TileKind::Obstacle,
        }
    }

    /// Create from a streamer configuration
    pub fn from_config(config: &StreamerConfig) -> Self {
        Self {
            ground_height_level: config.ground_height_level,
            obstacle_rate: clamp_rate(config.obstacle_rate),
            ground_tile: config.ground_tile,
            obstacle_tile: config.obstacle_tile,
        }
    }

    /// Override the tiles used for floor and obstacles
    pub fn with_tiles(mut self, ground: TileKind, obstacle: TileKind) -> Self {
        self.ground_tile = ground;
        self.obstacle_tile = obstacle;
        self
    }

    pub fn ground_height_level(&self) -> i32 {
        self.ground_height_level
    }

    pub fn obstacle_rate(&self) -> f32 {
        self.obstacle_rate
    }

    /// Regenerate the chunk's tiles. Returns the number of obstacles placed.
    pub fn generate<S, R>(&self, chunk: &mut Chunk<S>, rng: &mut R) -> usize
    where
        S: TileSurface,
        R: Rng + ?Sized,
    {
        let width = chunk.width();
        self.fill(chunk.surface_mut(), width, rng)
    }

    /// Clear `surface` and fill `width` columns.
    ///
    /// Draws exactly one value per column, left to right, whatever the rate,
    /// so the random stream stays aligned between runs with different rates.
    pub fn fill<S, R>(&self, surface: &mut S, width: u32, rng: &mut R) -> usize
    where
        S: TileSurface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.clear();

        let mut obstacles = 0;
        for x in 0..width as i32 {
            surface.set_tile(x, self.ground_height_level, self.ground_tile);

            let roll: f32 = rng.r#gen();
            if roll < self.obstacle_rate {
                surface.set_tile(x, self.ground_height_level + 1, self.obstacle_tile);
                obstacles += 1;
            }
        }
        obstacles
    }
}

/// Generate chunk content with the default floor and obstacle tiles.
pub fn generate<S, R>(
    chunk: &mut Chunk<S>,
    ground_height_level: i32,
    obstacle_rate: f32,
    rng: &mut R,
) -> usize
where
    S: TileSurface,
    R: Rng + ?Sized,
{
    ChunkGenerator::new(ground_height_level, obstacle_rate).generate(chunk, rng)
}

fn clamp_rate(rate: f32) -> f32 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}
