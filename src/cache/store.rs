//! Cache Store Module
//!
//! Key to target URL storage with per-entry absolute expiration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::cache::{CacheEntry, Clock};

// == Expiring Cache ==
/// In-memory map whose entries become invisible once their TTL has elapsed.
///
/// Expiry is enforced on read. Expired entries stay in the map until
/// [`ExpiringCache::purge_expired`] removes them.
pub struct ExpiringCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time source for expiry decisions
    clock: Arc<dyn Clock>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key` until `ttl` from now and returns the
    /// instant the entry expires.
    ///
    /// An existing entry for the same key is silently replaced, TTL included.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) -> DateTime<Utc> {
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        let expires_at = entry.expires_at;
        self.entries.insert(key, entry);
        expires_at
    }

    // == Get ==
    /// Returns the value for `key` if it was set and has not yet expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone())
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
