//! Growable object pool with lifecycle hooks
//!
//! Items live in a slot arena and are addressed by [`PoolHandle`]. Released
//! items go onto a free list and are handed back out before anything new is
//! constructed, so after warm-up an acquire/release cycle never allocates.
//!
//! The pool never refuses an acquire: when the free list is empty it asks the
//! lifecycle for a new item. Memory is therefore bounded by the peak number
//! of items held at once, not by a fixed capacity.

pub mod lifecycle;

pub use lifecycle::{FnLifecycle, PoolLifecycle};

/// Handle to an item owned by a [`Pool`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolHandle(u32);

impl PoolHandle {
    /// Slot index inside the pool
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A slot in the pool arena
struct PoolSlot<T> {
    item: T,
    in_use: bool,
}

/// Object pool parameterized by a [`PoolLifecycle`]
pub struct Pool<L: PoolLifecycle> {
    lifecycle: L,
    slots: Vec<PoolSlot<L::Item>>,
    /// Released slots, most recently released last
    free: Vec<PoolHandle>,
    active: usize,
    peak_active: usize,
}

impl<L: PoolLifecycle> Pool<L> {
    /// Create an empty pool
    pub fn new(lifecycle: L) -> Self {
        Self::with_capacity(lifecycle, 0)
    }

    /// Create an empty pool with bookkeeping room for `capacity` items.
    ///
    /// Nothing is constructed up front; items are still created lazily.
    pub fn with_capacity(lifecycle: L, capacity: usize) -> Self {
        Self {
            lifecycle,
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            active: 0,
            peak_active: 0,
        }
    }

    /// Take an item out of the pool, constructing one if none are free.
    pub fn acquire(&mut self) -> PoolHandle {
        let handle = match self.free.pop() {
            Some(handle) => handle,
            None => {
                let item = self.lifecycle.create();
                let handle = PoolHandle(self.slots.len() as u32);
                self.slots.push(PoolSlot { item, in_use: false });
                log::trace!("Pool grew to {} items", self.slots.len());
                handle
            }
        };

        let slot = &mut self.slots[handle.index()];
        slot.in_use = true;
        self.lifecycle.on_acquire(&mut slot.item);

        self.active += 1;
        self.peak_active = self.peak_active.max(self.active);
        handle
    }

    /// Return an item to the pool.
    ///
    /// # Panics
    /// In debug builds, panics if the handle is unknown or already released.
    /// Release builds log the violation and leave the pool untouched.
    pub fn release(&mut self, handle: PoolHandle) {
        let Some(slot) = self.slots.get_mut(handle.index()) else {
            debug_assert!(false, "release of unknown pool handle {:?}", handle);
            log::error!("Release of unknown pool handle {:?}", handle);
            return;
        };
        debug_assert!(slot.in_use, "double release of pool handle {:?}", handle);
        if !slot.in_use {
            log::error!("Double release of pool handle {:?}", handle);
            return;
        }

        self.lifecycle.on_release(&mut slot.item);
        slot.in_use = false;
        self.free.push(handle);
        self.active -= 1;
    }

    /// Destroy every item, pooled or still held, and empty the pool.
    ///
    /// All outstanding handles become invalid.
    pub fn dispose(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        let total = self.slots.len();
        let held = self.active;
        for slot in self.slots.drain(..) {
            self.lifecycle.on_dispose(slot.item);
        }
        self.free.clear();
        self.active = 0;
        log::debug!("Disposed pool: {} items ({} still held)", total, held);
    }

    /// Item for a handle, if the handle is known to the pool
    pub fn get(&self, handle: PoolHandle) -> Option<&L::Item> {
        self.slots.get(handle.index()).map(|slot| &slot.item)
    }

    /// Mutable item for a handle, if the handle is known to the pool
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut L::Item> {
        self.slots.get_mut(handle.index()).map(|slot| &mut slot.item)
    }

    /// Whether the handle is currently acquired
    pub fn is_active(&self, handle: PoolHandle) -> bool {
        self.slots
            .get(handle.index())
            .is_some_and(|slot| slot.in_use)
    }

    /// Total items ever constructed and not yet disposed
    pub fn constructed(&self) -> usize {
        self.slots.len()
    }

    /// Items currently acquired
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Items waiting on the free list
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Highest number of simultaneously acquired items
    pub fn peak_active(&self) -> usize {
        self.peak_active
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }
}

impl<T, C, A, D, X> Pool<FnLifecycle<C, A, D, X>>
where
    C: FnMut() -> T,
    A: FnMut(&mut T),
    D: FnMut(&mut T),
    X: FnMut(T),
{
    /// Build a pool straight from the four lifecycle functions
    pub fn from_fns(create: C, activate: A, deactivate: D, dispose: X) -> Self {
        Self::new(FnLifecycle::new(create, activate, deactivate, dispose))
    }
}

impl<L: PoolLifecycle> Drop for Pool<L> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        created: usize,
        activated: usize,
        deactivated: usize,
        disposed: usize,
    }

    struct Counting {
        counters: Rc<RefCell<Counters>>,
    }

    impl PoolLifecycle for Counting {
        type Item = (u32, bool);

        fn create(&mut self) -> Self::Item {
            let mut c = self.counters.borrow_mut();
            c.created += 1;
            (c.created as u32, false)
        }

        fn on_acquire(&mut self, item: &mut Self::Item) {
            self.counters.borrow_mut().activated += 1;
            item.1 = true;
        }

        fn on_release(&mut self, item: &mut Self::Item) {
            self.counters.borrow_mut().deactivated += 1;
            item.1 = false;
        }

        fn on_dispose(&mut self, _item: Self::Item) {
            self.counters.borrow_mut().disposed += 1;
        }
    }

    fn counting_pool() -> (Pool<Counting>, Rc<RefCell<Counters>>) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let pool = Pool::new(Counting {
            counters: Rc::clone(&counters),
        });
        (pool, counters)
    }

    #[test]
    fn test_acquire_constructs_when_empty() {
        let (mut pool, counters) = counting_pool();
        let a = pool.acquire();
        let b = pool.acquire();
        assert_ne!(a, b);
        assert_eq!(counters.borrow().created, 2);
        assert_eq!(counters.borrow().activated, 2);
        assert_eq!(pool.active_count(), 2);
        assert!(pool.get(a).unwrap().1);
    }

    #[test]
    fn test_release_then_acquire_reuses() {
        let (mut pool, counters) = counting_pool();
        let a = pool.acquire();
        pool.release(a);
        assert_eq!(pool.free_count(), 1);
        assert!(!pool.is_active(a));
        assert!(!pool.get(a).unwrap().1);

        let b = pool.acquire();
        assert_eq!(a, b);
        assert_eq!(counters.borrow().created, 1);
        assert_eq!(counters.borrow().activated, 2);
        assert_eq!(counters.borrow().deactivated, 1);
    }

    #[test]
    fn test_content_survives_release() {
        let mut pool = Pool::from_fns(|| vec![0u8; 4], |_| {}, |_| {}, |_| {});
        let h = pool.acquire();
        pool.get_mut(h).unwrap()[0] = 7;
        pool.release(h);
        let h = pool.acquire();
        assert_eq!(pool.get(h).unwrap()[0], 7);
    }

    #[test]
    fn test_peak_tracks_high_water_mark() {
        let (mut pool, _) = counting_pool();
        let handles: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
        for h in &handles[..3] {
            pool.release(*h);
        }
        pool.acquire();
        assert_eq!(pool.active_count(), 3);
        assert_eq!(pool.peak_active(), 5);
        assert_eq!(pool.constructed(), 5);
    }

    #[test]
    fn test_dispose_destroys_everything() {
        let (mut pool, counters) = counting_pool();
        let a = pool.acquire();
        let _b = pool.acquire();
        pool.release(a);
        pool.dispose();

        assert_eq!(counters.borrow().disposed, 2);
        assert_eq!(pool.constructed(), 0);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.free_count(), 0);
        assert!(pool.get(a).is_none());
    }

    #[test]
    fn test_drop_disposes_once() {
        let (mut pool, counters) = counting_pool();
        pool.acquire();
        pool.dispose();
        drop(pool);
        assert_eq!(counters.borrow().disposed, 1);

        let (mut pool, counters) = counting_pool();
        pool.acquire();
        drop(pool);
        assert_eq!(counters.borrow().disposed, 1);
    }

    #[test]
    fn test_from_fns_runs_hooks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (l1, l2, l3, l4) = (log.clone(), log.clone(), log.clone(), log.clone());
        let mut pool = Pool::from_fns(
            move || {
                l1.borrow_mut().push("create");
                0u32
            },
            move |_| l2.borrow_mut().push("get"),
            move |_| l3.borrow_mut().push("release"),
            move |_| l4.borrow_mut().push("destroy"),
        );
        let h = pool.acquire();
        pool.release(h);
        pool.acquire();
        pool.dispose();
        assert_eq!(
            *log.borrow(),
            vec!["create", "get", "release", "get", "destroy"]
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "double release")]
    fn test_double_release_panics_in_debug() {
        let (mut pool, _) = counting_pool();
        let h = pool.acquire();
        pool.release(h);
        pool.release(h);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown pool handle")]
    fn test_unknown_handle_panics_in_debug() {
        let (mut pool, _) = counting_pool();
        pool.release(PoolHandle(42));
    }
}
