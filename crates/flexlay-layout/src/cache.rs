//! Per-pass memo of measured item sizes.

use flexlay_core::{ItemId, Size};
use std::collections::HashMap;

/// Measured sizes for the current layout pass.
///
/// The engine clears the cache at the start of every pass, so self-sizing
/// hooks are consulted again each time layout runs.
#[derive(Debug, Default)]
pub struct MeasureCache {
    entries: HashMap<ItemId, Size>,
    hits: usize,
    misses: usize,
}

impl MeasureCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a measured size.
    #[must_use]
    pub fn get(&mut self, item: ItemId) -> Option<Size> {
        if let Some(&size) = self.entries.get(&item) {
            self.hits += 1;
            Some(size)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Record a measured size.
    pub fn insert(&mut self, item: ItemId, size: Size) {
        self.entries.insert(item, size);
    }

    /// Clear the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
