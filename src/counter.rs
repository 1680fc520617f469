//! Request Counter Module
//!
//! Tracks how many service-layer operations have been invoked.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

// == Request Counter ==
/// Monotonic counter of service-layer requests.
///
/// One instance is shared across every service through an `Arc`; each
/// service method increments it on entry and logs the running total, so
/// the count is observable both in the logs and on the stats endpoint.
#[derive(Debug, Default)]
pub struct RequestCounter {
    count: AtomicU64,
}

impl RequestCounter {
    // == Constructor ==
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Increment ==
    /// Increments the counter and returns the updated total.
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    // == Record ==
    /// Increments the counter and logs the running total for `operation`.
    pub fn record(&self, operation: &str) {
        let total = self.increment();
        debug!("Request #{}: {}", total, operation);
    }

    // == Count ==
    /// Returns the current total.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    // == Reset ==
    /// Resets the counter to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}
