//! Construct-once child handle cache.
//!
//! Every composite resource owns a [`ChildCache`]. The first access to a child
//! builds it and publishes it; every later access, from any thread, returns
//! that same `Arc`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type Slot = Arc<dyn Any + Send + Sync>;

/// A per-node cache of child handles, keyed by child type.
#[derive(Default)]
pub struct ChildCache {
    slots: RwLock<HashMap<TypeId, Slot>>,
}

// Verify ChildCache is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChildCache>();
};

impl ChildCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached child of type `C`, building it with `init` on first
    /// access.
    ///
    /// Concurrent first accesses race on the write lock; the first to take it
    /// publishes its value and `init` runs at most once per cache.
    pub fn get_or_init<C, F>(&self, init: F) -> Arc<C>
    where
        C: Any + Send + Sync,
        F: FnOnce() -> C,
    {
        let key = TypeId::of::<C>();

        if let Some(child) = self.lookup::<C>(key) {
            return child;
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(child) = slots
            .get(&key)
            .and_then(|slot| Arc::clone(slot).downcast::<C>().ok())
        {
            return child;
        }

        let child = Arc::new(init());
        slots.insert(key, Arc::clone(&child) as Slot);
        child
    }

    /// Returns the number of children built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no child has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup<C: Any + Send + Sync>(&self, key: TypeId) -> Option<Arc<C>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&key)
            .and_then(|slot| Arc::clone(slot).downcast::<C>().ok())
    }
}

impl fmt::Debug for ChildCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildCache")
            .field("children", &self.len())
            .finish()
    }
}
