//! Lookup cache for resolved devices
//!
//! Resolved devices are kept in a [`KeyValueStore`] under `codename:model`
//! keys as serialized [`DeviceInfo`] JSON. Entries never expire. Without a
//! capacity the cache only grows; with one, the least recently used entry is
//! evicted when a write would exceed it.

use crate::kv::KeyValueStore;
use devicename_types::{CacheCapacity, DeviceInfo, DeviceQuery, Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups
    pub lookups: u64,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups the cache could not answer
    pub misses: u64,
    /// Entries written
    pub writes: u64,
    /// Entries evicted to stay under capacity
    pub evictions: u64,
    /// Entries currently stored
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

#[derive(Debug, Default)]
struct Recency {
    ticks: HashMap<String, u64>,
    clock: u64,
    stats: CacheStats,
}

impl Recency {
    fn touch(&mut self, key: &str) {
        self.clock += 1;
        self.ticks.insert(key.to_string(), self.clock);
    }

    fn least_recent(&self, except: &str) -> Option<String> {
        self.ticks
            .iter()
            .filter(|(key, _)| key.as_str() != except)
            .min_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(key, _)| key.clone())
    }
}

/// Persistent cache of resolved devices
pub struct DeviceCache {
    store: Arc<dyn KeyValueStore>,
    capacity: Option<CacheCapacity>,
    recency: Mutex<Recency>,
}

impl DeviceCache {
    /// Create an unbounded cache over `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        Self::with_capacity(store, None)
    }

    /// Create a cache over `store` that keeps at most `capacity` entries
    ///
    /// Entries already in the store start out equally old, ordered by key.
    pub fn with_capacity(
        store: Arc<dyn KeyValueStore>,
        capacity: Option<CacheCapacity>,
    ) -> Result<Self> {
        let mut recency = Recency::default();
        for (key, _) in store.scan("")? {
            recency.touch(&key);
        }
        recency.stats.entries = recency.ticks.len();

        debug!(
            "Device cache opened with {} entries (capacity: {:?})",
            recency.stats.entries,
            capacity.map(CacheCapacity::get)
        );

        let cache = Self {
            store,
            capacity,
            recency: Mutex::new(recency),
        };
        cache.enforce_capacity("")?;
        Ok(cache)
    }

    /// Get the cached info for `query`
    ///
    /// Entries that no longer parse are treated as misses.
    pub fn get(&self, query: &DeviceQuery) -> Result<Option<DeviceInfo>> {
        let key = query.cache_key();
        let raw = self.store.get(&key)?;

        let mut recency = self.recency.lock();
        recency.stats.lookups += 1;

        let Some(raw) = raw else {
            recency.stats.misses += 1;
            trace!("Cache miss for key: {}", key);
            return Ok(None);
        };

        match serde_json::from_str::<DeviceInfo>(&raw) {
            Ok(info) => {
                recency.stats.hits += 1;
                recency.touch(&key);
                trace!("Cache hit for key: {}", key);
                Ok(Some(info))
            }
            Err(e) => {
                recency.stats.misses += 1;
                warn!("Ignoring unreadable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Whether an entry exists for `query`, without counting a lookup
    pub fn contains(&self, query: &DeviceQuery) -> Result<bool> {
        Ok(self.store.get(&query.cache_key())?.is_some())
    }

    /// Store `info` as the answer for `query`
    pub fn insert(&self, query: &DeviceQuery, info: &DeviceInfo) -> Result<()> {
        let key = query.cache_key();
        let json = serde_json::to_string(info)
            .map_err(|e| Error::storage(format!("Failed to serialize {}: {}", key, e)))?;
        self.store.set(&key, &json)?;

        {
            let mut recency = self.recency.lock();
            recency.touch(&key);
            recency.stats.writes += 1;
            recency.stats.entries = recency.ticks.len();
        }
        debug!("Cached device info for key: {}", key);

        self.enforce_capacity(&key)
    }

    /// Every cached entry, sorted by key
    pub fn entries(&self) -> Result<Vec<(String, DeviceInfo)>> {
        Ok(self
            .store
            .scan("")?
            .into_iter()
            .filter_map(|(key, raw)| {
                serde_json::from_str::<DeviceInfo>(&raw)
                    .ok()
                    .map(|info| (key, info))
            })
            .collect())
    }

    /// Remove every entry
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        let mut recency = self.recency.lock();
        recency.ticks.clear();
        recency.stats.entries = 0;
        debug!("Cache cleared");
        Ok(())
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.recency.lock().stats.clone()
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.recency.lock().ticks.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn enforce_capacity(&self, keep: &str) -> Result<()> {
        let Some(capacity) = self.capacity else {
            return Ok(());
        };

        loop {
            let victim = {
                let recency = self.recency.lock();
                if recency.ticks.len() <= capacity.get() {
                    return Ok(());
                }
                recency.least_recent(keep)
            };
            let Some(victim) = victim else {
                return Ok(());
            };

            debug!("Evicting LRU entry: {}", victim);
            self.store.delete(&victim)?;

            let mut recency = self.recency.lock();
            recency.ticks.remove(&victim);
            recency.stats.evictions += 1;
            recency.stats.entries = recency.ticks.len();
        }
    }
}

impl std::fmt::Debug for DeviceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

/// Shared handle to a device cache
pub type SharedDeviceCache = Arc<DeviceCache>;
