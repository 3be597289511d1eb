//! Key-value store abstraction

use devicename_types::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// String key-value storage
///
/// Keys follow the `codename:model` convention for cached devices and plain
/// names (`android-devices.db`) for installation markers.
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a key-value pair, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    /// Scan all keys matching a prefix. Returns sorted (key, value) pairs.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, String)>>;

    /// Remove every key
    fn clear(&self) -> Result<()>;
}

/// Volatile store, mostly for tests and one-shot CLI runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        Ok(scan_map(&self.entries.read(), prefix))
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }
}

pub(crate) fn scan_map(map: &BTreeMap<String, String>, prefix: &str) -> Vec<(String, String)> {
    map.range(prefix.to_string()..)
        .take_while(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("flo:Nexus 7").unwrap(), None);

        store.set("flo:Nexus 7", "{}").unwrap();
        assert_eq!(store.get("flo:Nexus 7").unwrap().as_deref(), Some("{}"));

        store.delete("flo:Nexus 7").unwrap();
        assert_eq!(store.get("flo:Nexus 7").unwrap(), None);
        store.delete("flo:Nexus 7").unwrap();
    }

    #[test]
    fn test_scan_prefix() {
        let store = MemoryStore::new();
        store.set("zerolte:SM-G925I", "a").unwrap();
        store.set("zerolte:SM-G925F", "b").unwrap();
        store.set("zeroflte:SM-G920F", "c").unwrap();

        let hits = store.scan("zerolte:").unwrap();
        assert_eq!(
            hits,
            vec![
                ("zerolte:SM-G925F".to_string(), "b".to_string()),
                ("zerolte:SM-G925I".to_string(), "a".to_string()),
            ]
        );
        assert_eq!(store.scan("").unwrap().len(), 3);

        store.clear().unwrap();
        assert!(store.scan("").unwrap().is_empty());
    }
}
