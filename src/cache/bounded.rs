//! Bounded Cache Module
//!
//! Main cache engine combining HashMap storage with FIFO eviction tracking.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::cache::DEFAULT_CACHE_CAPACITY;

// == Bounded Cache ==
/// A capacity-bounded associative store with FIFO eviction.
///
/// Alongside the key-value mapping the cache keeps a queue of keys in
/// first-insertion order; when an insert pushes the mapping past its
/// capacity, the key at the front of that queue is evicted. Eviction is
/// independent of access recency: reads never reorder the queue, and
/// overwriting an existing key leaves its position unchanged.
///
/// The mapping never holds more than `capacity` entries once an operation
/// returns, and the queue contains each mapped key exactly once.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Keys in first-insertion order; the front is the next eviction victim
    order: VecDeque<K>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A zero capacity is allowed and yields a cache that evicts every
    /// entry as soon as it is inserted.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    // == Put ==
    /// Stores a key-value pair, evicting the oldest entry on overflow.
    ///
    /// If `key` is already present its value is overwritten in place and
    /// its position in the insertion order does not change. If `key` is
    /// new it is appended as the youngest entry; should the mapping then
    /// exceed the capacity, the single oldest key is evicted. Size grows
    /// by at most one per call, so one eviction always restores the bound.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to associate with the key
    pub fn put(&mut self, key: K, value: V) {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return;
        }
        self.entries.insert(key.clone(), value);
        self.order.push_back(key);
        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    // == Get ==
    /// Returns the value mapped to `key`, or `None` if absent.
    ///
    /// Lookups have no side effects: unlike an LRU cache, reading an entry
    /// does not protect it from eviction.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Deletes the mapping for `key`; a no-op if the key is absent.
    pub fn remove(&mut self, key: &K) {
        if self.entries.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }

    // == Clear ==
    /// Removes every entry from the mapping and the insertion order.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the current number of mapped entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> Default for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
