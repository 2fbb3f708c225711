use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex, OnceLock},
};

/// Keyed single-initialization cache.
///
/// Each key is populated at most once. Concurrent callers asking for distinct
/// keys proceed independently; concurrent callers asking for the *same* key are
/// serialized through that key's once-cell, so the (potentially expensive)
/// initializer runs exactly once per key. The map lock is held only long enough
/// to find or insert the cell, never across the initializer.
#[derive(Debug)]
pub struct KeyedOnce<K, V> {
    slots: Mutex<HashMap<K, Arc<OnceLock<V>>>>,
}

impl<K, V> KeyedOnce<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for KeyedOnce<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> KeyedOnce<K, V> {
    /// Return the cached value for `key`, initializing it with `init` on first use.
    pub fn get_or_init(&self, key: K, init: impl FnOnce() -> V) -> V {
        let cell = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(slots.entry(key).or_default())
        };
        cell.get_or_init(init).clone()
    }

    /// Return the cached value for `key` without initializing.
    pub fn get(&self, key: &K) -> Option<V> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.get(key).and_then(|cell| cell.get().cloned())
    }

    /// Drop all cached values.
    pub fn clear(&self) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.clear();
    }

    /// Number of keys with a slot (populated or in flight).
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.len()
    }

    /// `true` when no key has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/cache.rs"]
mod tests;
