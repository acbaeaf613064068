//! Lifecycle hooks the pool runs on its items

/// The four functions that parameterize a [`Pool`](super::Pool).
///
/// Only `create` is required; the hooks default to doing nothing.
pub trait PoolLifecycle {
    /// Pooled item type
    type Item;

    /// Build a brand new item when the free list is empty
    fn create(&mut self) -> Self::Item;

    /// Run on every acquire, fresh or reused
    fn on_acquire(&mut self, _item: &mut Self::Item) {}

    /// Run on every release, before the item joins the free list
    fn on_release(&mut self, _item: &mut Self::Item) {}

    /// Run once per item when the pool is disposed
    fn on_dispose(&mut self, _item: Self::Item) {}
}

/// Closure-backed lifecycle, built by [`Pool::from_fns`](super::Pool::from_fns).
pub struct FnLifecycle<C, A, D, X> {
    create: C,
    activate: A,
    deactivate: D,
    dispose: X,
}

impl<C, A, D, X> FnLifecycle<C, A, D, X> {
    pub fn new(create: C, activate: A, deactivate: D, dispose: X) -> Self {
        Self {
            create,
            activate,
            deactivate,
            dispose,
        }
    }
}

impl<T, C, A, D, X> PoolLifecycle for FnLifecycle<C, A, D, X>
where
    C: FnMut() -> T,
    A: FnMut(&mut T),
    D: FnMut(&mut T),
    X: FnMut(T),
{
    type Item = T;

    fn create(&mut self) -> T {
        (self.create)()
    }

    fn on_acquire(&mut self, item: &mut T) {
        (self.activate)(item)
    }

    fn on_release(&mut self, item: &mut T) {
        (self.deactivate)(item)
    }

    fn on_dispose(&mut self, item: T) {
        (self.dispose)(item)
    }
}
