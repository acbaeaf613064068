//! Chunk Streamer - scrolls the world and keeps the viewport covered
//!
//! Every tick runs three phases in a fixed order:
//! 1. Move: shift all active chunks (and the spawn cursor) left by `speed * dt`
//! 2. Recycle: return chunks whose right edge has passed the left screen edge
//! 3. Spawn: append freshly generated chunks until the cursor reaches the
//!    right screen edge
//!
//! Recycling always sees post-move positions and spawning always sees the
//! post-recycle sequence. Once the pool has grown to the peak number of
//! visible chunks, a tick performs no allocation.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::Rng;
use rand::rngs::StdRng;

use super::chunk::{Chunk, ChunkLifecycle};
use super::config::{validate_speed, StreamerConfig};
use super::viewport::ViewportProvider;
use crate::core::Result;
use crate::generation::ChunkGenerator;
use crate::pool::{Pool, PoolHandle};
use crate::tile::{TileGrid, TileSurface};

/// Outcome of a single [`ChunkStreamer::tick`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Distance the world scrolled left
    pub moved: f32,
    /// Chunks returned to the pool
    pub recycled: usize,
    /// Chunks acquired and generated
    pub spawned: usize,
    /// True when the viewport was unavailable and nothing ran
    pub skipped: bool,
}

impl TickReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}

/// Snapshot of the chunk pool's counters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolStats {
    /// Chunks constructed so far
    pub constructed: usize,
    /// Chunks currently in the active sequence
    pub active: usize,
    /// Chunks waiting in the pool
    pub free: usize,
    /// Most chunks ever active at once
    pub peak_active: usize,
}

/// Endless side-scrolling chunk streamer
pub struct ChunkStreamer<V, R, S = TileGrid>
where
    S: TileSurface + Default,
{
    config: StreamerConfig,
    generator: ChunkGenerator,
    pool: Pool<ChunkLifecycle<S>>,
    /// Active chunks, leftmost first
    active: VecDeque<PoolHandle>,
    /// World x where the next chunk goes
    cursor: f32,
    viewport: V,
    rng: R,
    /// Whether the initial fill has run
    primed: bool,
    /// Set while ticks are being skipped for lack of a viewport
    viewport_lost: bool,
}

impl<V: ViewportProvider> ChunkStreamer<V, StdRng> {
    /// Streamer with [`TileGrid`] surfaces and a seeded [`StdRng`]
    pub fn seeded(config: StreamerConfig, viewport: V, seed: u64) -> Result<Self> {
        Self::new(config, viewport, StdRng::seed_from_u64(seed))
    }
}

impl<V, R, S> ChunkStreamer<V, R, S>
where
    V: ViewportProvider,
    R: Rng,
    S: TileSurface + Default,
{
    /// Validate `config` and build the streamer.
    ///
    /// If the viewport is available the screen is filled right away, plus one
    /// chunk of buffer past the right edge. Otherwise the fill happens on the
    /// first tick that has a viewport.
    pub fn new(config: StreamerConfig, viewport: V, rng: R) -> Result<Self> {
        let config = config.validate()?;
        let generator = ChunkGenerator::from_config(&config);
        let pool = Pool::with_capacity(
            ChunkLifecycle::new(config.chunk_width),
            config.pool_initial_capacity,
        );

        let mut streamer = Self {
            active: VecDeque::with_capacity(config.pool_initial_capacity),
            config,
            generator,
            pool,
            cursor: 0.0,
            viewport,
            rng,
            primed: false,
            viewport_lost: false,
        };

        match streamer.viewport_edges() {
            Some((_, right)) => {
                streamer.prime(right);
            }
            None => log::warn!("No viewport at startup, deferring initial fill"),
        }

        log::info!(
            "Chunk streamer ready: width {}, speed {}, {} chunks active",
            streamer.config.chunk_width,
            streamer.config.speed,
            streamer.active.len()
        );
        Ok(streamer)
    }

    /// Advance the world by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let Some((left, right)) = self.viewport_edges() else {
            if !self.viewport_lost {
                log::warn!("Viewport unavailable, pausing chunk streaming");
                self.viewport_lost = true;
            }
            return TickReport::skipped();
        };
        if self.viewport_lost {
            log::info!("Viewport available again, resuming chunk streaming");
            self.viewport_lost = false;
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Ignoring invalid frame delta {}", dt);
            0.0
        };

        let moved = self.move_world(self.config.speed * dt);
        let recycled = self.recycle(left);
        let spawned = if self.primed {
            self.spawn_until(right)
        } else {
            self.prime(right)
        };

        TickReport {
            moved,
            recycled,
            spawned,
            skipped: false,
        }
    }

    /// Change the scroll speed. Rejects the same values as the config does.
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        validate_speed(speed)?;
        self.config.speed = speed;
        Ok(())
    }

    /// Dispose every chunk and tear the streamer down
    pub fn shutdown(mut self) {
        let stats = self.pool_stats();
        self.active.clear();
        self.pool.dispose();
        log::info!(
            "Chunk streamer shut down: {} chunks constructed, peak {} active",
            stats.constructed,
            stats.peak_active
        );
    }

    // --- Phases ---

    /// Shift chunks and cursor left by `distance`
    fn move_world(&mut self, distance: f32) -> f32 {
        for &handle in &self.active {
            if let Some(chunk) = self.pool.get_mut(handle) {
                chunk.translate(-distance);
            }
        }
        self.cursor -= distance;
        distance
    }

    /// Release leading chunks that are entirely left of `left_edge`
    fn recycle(&mut self, left_edge: f32) -> usize {
        let mut recycled = 0;
        while let Some(&front) = self.active.front() {
            let Some(chunk) = self.pool.get(front) else {
                break;
            };
            if chunk.right_edge() >= left_edge {
                break;
            }
            log::trace!("Recycling chunk {:?} at x={}", front, chunk.position());
            self.active.pop_front();
            self.pool.release(front);
            recycled += 1;
        }
        if recycled > 0 {
            log::debug!("Recycled {} chunks, {} active", recycled, self.active.len());
        }
        recycled
    }

    /// Append generated chunks while the cursor is left of `target`
    fn spawn_until(&mut self, target: f32) -> usize {
        let width = self.config.chunk_width as f32;
        let mut spawned = 0;
        while self.cursor < target {
            let handle = self.pool.acquire();
            if let Some(chunk) = self.pool.get_mut(handle) {
                chunk.set_position(self.cursor);
                self.generator.generate(chunk, &mut self.rng);
            }
            log::trace!("Spawned chunk {:?} at x={}", handle, self.cursor);
            self.active.push_back(handle);
            spawned += 1;

            let next = self.cursor + width;
            if next <= self.cursor {
                log::error!(
                    "Spawn cursor stuck at x={} (chunk width {} below float precision)",
                    self.cursor,
                    width
                );
                break;
            }
            self.cursor = next;
        }
        if spawned > 0 {
            log::debug!(
                "Spawned {} chunks, {} active, cursor at {}",
                spawned,
                self.active.len(),
                self.cursor
            );
        }
        spawned
    }

    /// Initial fill: cover the screen plus one chunk of buffer
    fn prime(&mut self, right_edge: f32) -> usize {
        self.primed = true;
        self.spawn_until(right_edge + self.config.chunk_width as f32)
    }

    /// Both edges, or `None` if either is missing or not a finite number
    fn viewport_edges(&self) -> Option<(f32, f32)> {
        let left = self.viewport.left_edge();
        let right = self.viewport.right_edge();
        match (left, right) {
            (Some(l), Some(r)) if l.is_finite() && r.is_finite() => Some((l, r)),
            _ => None,
        }
    }
}

// --- Introspection ---

impl<V, R, S> ChunkStreamer<V, R, S>
where
    S: TileSurface + Default,
{
    /// Number of chunks in the active sequence
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// World x where the next chunk will be placed
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Positions of active chunks, leftmost first
    pub fn positions(&self) -> Vec<f32> {
        self.chunks().map(Chunk::position).collect()
    }

    /// Active chunks, leftmost first
    pub fn chunks(&self) -> impl DoubleEndedIterator<Item = &Chunk<S>> + '_ {
        self.active.iter().filter_map(|&h| self.pool.get(h))
    }

    /// Pool handles of active chunks, leftmost first
    pub fn handles(&self) -> impl Iterator<Item = PoolHandle> + '_ {
        self.active.iter().copied()
    }

    /// Active chunk for a handle returned by [`handles`](Self::handles)
    pub fn chunk(&self, handle: PoolHandle) -> Option<&Chunk<S>> {
        self.pool.get(handle).filter(|c| c.is_active())
    }

    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            constructed: self.pool.constructed(),
            active: self.pool.active_count(),
            free: self.pool.free_count(),
            peak_active: self.pool.peak_active(),
        }
    }

    pub fn config(&self) -> &StreamerConfig {
        &self.config
    }

    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    pub fn chunk_width(&self) -> u32 {
        self.config.chunk_width
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access for hosts that own the camera through the streamer
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}
