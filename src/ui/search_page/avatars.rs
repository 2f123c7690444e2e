// SPDX-License-Identifier: MPL-2.0
//! LRU cache for owner avatar images.
//!
//! Avatars are fetched once per distinct URL and kept as decoded image
//! handles. The cache also tracks which URLs have a fetch outstanding so
//! a page of results never requests the same avatar twice.
//!
//! # Design
//!
//! - **LRU eviction**: least recently inserted avatars are evicted first
//! - **Entry-bounded**: capacity is a number of avatars, not bytes; at the
//!   largest page size one page contributes at most 50 distinct entries
//! - **Failure is cosmetic**: a failed fetch leaves the placeholder in
//!   place and clears the pending mark, so a later page visit retries it

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default number of avatars kept in memory.
///
/// Covers several pages at the largest page size before anything is
/// evicted.
pub const DEFAULT_CAPACITY: usize = 256;

/// Cache of fetched avatar images keyed by URL.
pub struct AvatarCache {
    cache: LruCache<String, Handle>,
    /// URLs with a fetch in flight. Cleared on completion or failure.
    pending: HashSet<String>,
}

impl Default for AvatarCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarCache {
    /// Creates a cache with the default capacity.
    ///
    /// # Panics
    ///
    /// Panics if the compile-time default `DEFAULT_CAPACITY` is zero,
    /// which would indicate a build configuration error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` avatars.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(
            NonZeroUsize::new(DEFAULT_CAPACITY).expect("DEFAULT_CAPACITY must be non-zero"),
        );
        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
        }
    }

    /// Returns the cached handle for a URL, if the avatar has arrived.
    ///
    /// Uses a non-promoting lookup so the view can render from `&self`;
    /// recency is established at insertion time.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<Handle> {
        self.cache.peek(url).cloned()
    }

    /// Filters `urls` down to the ones that actually need a fetch and
    /// marks them pending.
    ///
    /// Cached and already-pending URLs are skipped, as are duplicates
    /// within the batch itself.
    pub fn begin_fetch(&mut self, urls: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut to_fetch = Vec::new();
        for url in urls {
            if self.cache.contains(&url) || self.pending.contains(&url) {
                continue;
            }
            self.pending.insert(url.clone());
            to_fetch.push(url);
        }
        to_fetch
    }

    /// Stores the fetched image bytes for a URL and clears its pending
    /// mark.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) {
        self.pending.remove(&url);
        self.cache.put(url, Handle::from_bytes(bytes));
    }

    /// Records a failed fetch. The URL becomes fetchable again on the
    /// next page of results that mentions it.
    pub fn mark_failed(&mut self, url: &str) {
        self.pending.remove(url);
    }

    /// Number of avatars currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(n: u32) -> String {
        format!("https://avatars.test/u/{n}.png")
    }

    #[test]
    fn begin_fetch_marks_new_urls_pending() {
        let mut avatars = AvatarCache::new();
        let batch = avatars.begin_fetch([url(1), url(2)]);
        assert_eq!(batch, vec![url(1), url(2)]);
    }

    #[test]
    fn begin_fetch_skips_duplicates_within_a_batch() {
        let mut avatars = AvatarCache::new();
        let batch = avatars.begin_fetch([url(1), url(1), url(1)]);
        assert_eq!(batch, vec![url(1)]);
    }

    #[test]
    fn begin_fetch_skips_pending_urls() {
        let mut avatars = AvatarCache::new();
        let first = avatars.begin_fetch([url(1)]);
        assert_eq!(first.len(), 1);

        let second = avatars.begin_fetch([url(1)]);
        assert!(second.is_empty());
    }

    #[test]
    fn begin_fetch_skips_cached_urls() {
        let mut avatars = AvatarCache::new();
        avatars.insert(url(1), vec![0xFF, 0xD8]);

        let batch = avatars.begin_fetch([url(1), url(2)]);
        assert_eq!(batch, vec![url(2)]);
    }

    #[test]
    fn insert_makes_the_handle_available() {
        let mut avatars = AvatarCache::new();
        let _ = avatars.begin_fetch([url(1)]);
        assert!(avatars.handle(&url(1)).is_none());

        avatars.insert(url(1), vec![0xFF, 0xD8]);
        assert!(avatars.handle(&url(1)).is_some());
        assert_eq!(avatars.len(), 1);
    }

    #[test]
    fn failed_fetch_becomes_fetchable_again() {
        let mut avatars = AvatarCache::new();
        let _ = avatars.begin_fetch([url(1)]);
        avatars.mark_failed(&url(1));

        assert!(avatars.handle(&url(1)).is_none());
        let retry = avatars.begin_fetch([url(1)]);
        assert_eq!(retry, vec![url(1)]);
    }

    #[test]
    fn capacity_evicts_least_recent_entries() {
        let mut avatars = AvatarCache::with_capacity(2);
        avatars.insert(url(1), vec![1]);
        avatars.insert(url(2), vec![2]);
        avatars.insert(url(3), vec![3]);

        assert_eq!(avatars.len(), 2);
        assert!(avatars.handle(&url(1)).is_none(), "oldest entry evicted");
        assert!(avatars.handle(&url(3)).is_some());
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let avatars = AvatarCache::with_capacity(0);
        assert!(avatars.is_empty());
    }
}
