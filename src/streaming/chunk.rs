//! Streamed world chunk and its pool lifecycle

use std::marker::PhantomData;

use crate::pool::PoolLifecycle;
use crate::tile::{TileGrid, TileSurface};

/// Fixed-width segment of the side-scrolling world.
///
/// A chunk is built once by the pool and then recycled: while active it sits
/// in the streamer's sequence with freshly generated tiles, while pooled its
/// tiles are stale and must be regenerated on the next acquire.
#[derive(Clone, Debug)]
pub struct Chunk<S = TileGrid> {
    /// World x of the chunk's left edge
    position: f32,
    /// Width in tile columns, identical for every chunk of a streamer
    width: u32,
    surface: S,
    active: bool,
}

impl<S> Chunk<S> {
    /// Create an inactive chunk at x = 0
    pub fn new(width: u32, surface: S) -> Self {
        Self {
            position: 0.0,
            width,
            surface,
            active: false,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn set_position(&mut self, x: f32) {
        self.position = x;
    }

    /// Shift the chunk along x
    pub fn translate(&mut self, dx: f32) {
        self.position += dx;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// World x one past the last column
    pub fn right_edge(&self) -> f32 {
        self.position + self.width as f32
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the chunk is currently handed out by its pool
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Pool lifecycle producing [`Chunk`]s with a default-constructed surface
pub struct ChunkLifecycle<S> {
    width: u32,
    _surface: PhantomData<fn() -> S>,
}

impl<S> ChunkLifecycle<S> {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            _surface: PhantomData,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl<S: TileSurface + Default> PoolLifecycle for ChunkLifecycle<S> {
    type Item = Chunk<S>;

    fn create(&mut self) -> Chunk<S> {
        log::trace!("Constructing chunk (width {})", self.width);
        Chunk::new(self.width, S::default())
    }

    fn on_acquire(&mut self, chunk: &mut Chunk<S>) {
        chunk.active = true;
    }

    fn on_release(&mut self, chunk: &mut Chunk<S>) {
        chunk.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Pool;
    use crate::tile::TileKind;

    #[test]
    fn test_chunk_edges() {
        let mut chunk = Chunk::new(10, TileGrid::new());
        chunk.set_position(-5.0);
        assert_eq!(chunk.right_edge(), 5.0);
        chunk.translate(-2.5);
        assert_eq!(chunk.position(), -7.5);
        assert_eq!(chunk.right_edge(), 2.5);
    }

    #[test]
    fn test_lifecycle_toggles_active_flag() {
        let mut pool: Pool<ChunkLifecycle<TileGrid>> = Pool::new(ChunkLifecycle::new(8));
        let h = pool.acquire();
        assert!(pool.get(h).unwrap().is_active());
        assert_eq!(pool.get(h).unwrap().width(), 8);

        pool.release(h);
        assert!(!pool.get(h).unwrap().is_active());
    }

    #[test]
    fn test_pool_keeps_stale_tiles() {
        let mut pool: Pool<ChunkLifecycle<TileGrid>> = Pool::new(ChunkLifecycle::new(4));
        let h = pool.acquire();
        pool.get_mut(h).unwrap().surface_mut().set_tile(0, 0, TileKind::Obstacle);
        pool.release(h);

        let h = pool.acquire();
        assert_eq!(pool.get(h).unwrap().surface().get(0, 0), Some(TileKind::Obstacle));
    }
}
