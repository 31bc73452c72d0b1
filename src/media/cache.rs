// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by displayed and preloaded images.
//!
//! Entries are keyed by the source string exactly as it appears in the image
//! sequence. The cache is bounded both by entry count and by decoded byte size;
//! the least recently used entry goes first when either limit is hit.
//!
//! The cache also tracks which sources are currently being fetched, so
//! navigating back and forth quickly never starts the same download twice.

use crate::media::ImageData;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default decoded byte budget (96 MB).
pub const DEFAULT_CACHE_BYTES: usize = 96 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// Minimum images to cache.
pub const MIN_MAX_IMAGES: usize = 4;

/// Maximum images to cache.
pub const MAX_MAX_IMAGES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_bytes: usize,
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration holding at most `max_images` images, clamped to
    /// the supported range.
    #[must_use]
    pub fn with_max_images(max_images: usize) -> Self {
        Self {
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

pub struct AssetCache {
    entries: LruCache<String, ImageData>,
    in_flight: HashSet<String>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl AssetCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            in_flight: HashSet::new(),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Inserts a decoded image and clears its in-flight marker.
    ///
    /// Returns `false` when the image alone exceeds half the byte budget; such
    /// images are shown but never kept.
    pub fn insert(&mut self, source: impl Into<String>, image: ImageData) -> bool {
        let source = source.into();
        self.in_flight.remove(&source);

        let size = image.size_bytes();
        if size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.entries.pop(&source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.config.max_bytes {
            let Some((_, evicted)) = self.entries.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }

        if let Some((_, evicted)) = self.entries.push(source, image) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        self.stats.insertions += 1;
        true
    }

    /// Returns a cached image and marks it most recently used.
    pub fn get(&mut self, source: &str) -> Option<ImageData> {
        match self.entries.get(source) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks for an entry without touching LRU order or statistics.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains(source)
    }

    #[must_use]
    pub fn is_in_flight(&self, source: &str) -> bool {
        self.in_flight.contains(source)
    }

    /// Marks `source` as being fetched.
    ///
    /// Returns `true` when the caller should start a fetch, `false` when the
    /// image is already cached or a fetch for it is outstanding.
    pub fn begin_fetch(&mut self, source: &str) -> bool {
        if self.entries.contains(source) || self.in_flight.contains(source) {
            return false;
        }
        self.in_flight.insert(source.to_string());
        true
    }

    /// Clears the in-flight marker after a failed fetch.
    pub fn abandon_fetch(&mut self, source: &str) {
        self.in_flight.remove(source);
    }

    /// Filters `sources` down to those neither cached nor being fetched.
    #[must_use]
    pub fn missing<'a>(&self, sources: &[&'a str]) -> Vec<&'a str> {
        sources
            .iter()
            .copied()
            .filter(|s| !self.entries.contains(*s) && !self.in_flight.contains(*s))
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("image_count", &self.entries.len())
            .field("in_flight", &self.in_flight.len())
            .field("memory_usage", &self.current_bytes)
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    #[test]
    fn insert_and_get_image() {
        let mut cache = AssetCache::default();
        assert!(cache.insert("a.jpg", test_image(10, 10)));
        assert_eq!(cache.get("a.jpg").map(|img| img.width), Some(10));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn count_limit_evicts_least_recently_used() {
        let mut cache = AssetCache::new(CacheConfig {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_images: 2,
        });
        cache.insert("a.jpg", test_image(4, 4));
        cache.insert("b.jpg", test_image(4, 4));
        let _ = cache.get("a.jpg");
        cache.insert("c.jpg", test_image(4, 4));

        assert!(cache.contains("a.jpg"));
        assert!(!cache.contains("b.jpg"));
        assert_eq!(cache.memory_usage(), 2 * 4 * 4 * 4);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn byte_limit_evicts_until_image_fits() {
        let mut cache = AssetCache::new(CacheConfig {
            max_bytes: 25_000,
            max_images: 100,
        });
        for i in 0..5 {
            cache.insert(format!("{i}.jpg"), test_image(50, 50));
        }
        assert!(cache.memory_usage() <= 25_000);
        assert!(cache.stats().evictions > 0);
        assert!(cache.contains("4.jpg"));
    }

    #[test]
    fn oversized_image_is_not_kept() {
        let mut cache = AssetCache::new(CacheConfig {
            max_bytes: 1_000,
            max_images: 4,
        });
        assert!(!cache.insert("huge.jpg", test_image(20, 20)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_same_source_does_not_double_count() {
        let mut cache = AssetCache::default();
        cache.insert("a.jpg", test_image(10, 10));
        cache.insert("a.jpg", test_image(10, 10));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 400);
    }

    #[test]
    fn begin_fetch_deduplicates_outstanding_requests() {
        let mut cache = AssetCache::default();
        assert!(cache.begin_fetch("a.jpg"));
        assert!(!cache.begin_fetch("a.jpg"));
        assert!(cache.is_in_flight("a.jpg"));

        cache.insert("a.jpg", test_image(2, 2));
        assert!(!cache.is_in_flight("a.jpg"));
        assert!(!cache.begin_fetch("a.jpg"));
    }

    #[test]
    fn abandoned_fetch_can_be_retried() {
        let mut cache = AssetCache::default();
        assert!(cache.begin_fetch("broken.jpg"));
        cache.abandon_fetch("broken.jpg");
        assert!(cache.begin_fetch("broken.jpg"));
    }

    #[test]
    fn missing_skips_cached_and_in_flight() {
        let mut cache = AssetCache::default();
        cache.insert("cached.jpg", test_image(2, 2));
        cache.begin_fetch("pending.jpg");

        let missing = cache.missing(&["cached.jpg", "pending.jpg", "new.jpg"]);
        assert_eq!(missing, ["new.jpg"]);
    }

    #[test]
    fn hit_rate_reflects_lookups() {
        let mut cache = AssetCache::default();
        cache.insert("a.jpg", test_image(2, 2));
        let _ = cache.get("a.jpg");
        let _ = cache.get("nope.jpg");
        assert!((cache.stats().hit_rate() - 50.0).abs() < 0.01);
    }

    #[test]
    fn with_max_images_clamps() {
        assert_eq!(CacheConfig::with_max_images(1).max_images, MIN_MAX_IMAGES);
        assert_eq!(CacheConfig::with_max_images(1000).max_images, MAX_MAX_IMAGES);
        assert_eq!(CacheConfig::with_max_images(20).max_images, 20);
    }
}
