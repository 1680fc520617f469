//! Cache Module
//!
//! Provides bounded in-memory caching with FIFO eviction.
//!
//! Each lookup service owns one [`BoundedCache`] instance keyed by
//! [`CacheKey`], sized by [`DEFAULT_CACHE_CAPACITY`] unless configured
//! otherwise. Eviction is strictly first-in first-out: reads never change
//! the eviction order.

mod bounded;
mod key;


// Re-export public types
pub use bounded::BoundedCache;
pub use key::CacheKey;

// == Public Constants ==
/// Default maximum number of entries a cache instance holds
pub const DEFAULT_CACHE_CAPACITY: usize = 5;
