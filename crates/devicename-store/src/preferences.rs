//! JSON-file backed key-value store

use crate::kv::{scan_map, KeyValueStore};
use crate::lock::{normalize, path_lock};
use devicename_types::{Error, Result};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

static SHARED_STORES: Lazy<Mutex<HashMap<PathBuf, Weak<PreferenceStore>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Durable key-value store persisted as a flat JSON object
///
/// The whole file is loaded at open and rewritten on every change. Writes go
/// to a sibling temp file which is then renamed over the original, so a crash
/// never leaves a half-written store behind.
///
/// A handle only sees its own writes. Use [`shared`](Self::shared) wherever
/// more than one component may touch the same file.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl PreferenceStore {
    /// Open the store at `path`, creating it lazily on first write
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let lock = path_lock(&path);
        let _guard = lock.lock();

        let entries = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|e| {
                Error::storage(format!("Failed to read '{}': {}", path.display(), e))
            })?;
            if data.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&data).map_err(|e| {
                    Error::storage(format!("Failed to parse '{}': {}", path.display(), e))
                })?
            }
        } else {
            debug!("Preference file {} does not exist yet", path.display());
            BTreeMap::new()
        };

        debug!(
            "Opened preference store {} with {} entries",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// The process-wide handle for `path`
    ///
    /// Every caller asking for the same path while a handle is alive gets
    /// that handle, so markers and cache entries written by one component are
    /// visible to the others and never overwritten by a stale copy. Once all
    /// handles are dropped the next call reloads the file.
    pub fn shared<P: AsRef<Path>>(path: P) -> Result<Arc<Self>> {
        let path = path.as_ref();
        let key = normalize(path);

        let mut stores = SHARED_STORES.lock();
        if let Some(store) = stores.get(&key).and_then(Weak::upgrade) {
            trace!("Reusing preference store {}", path.display());
            return Ok(store);
        }

        let store = Arc::new(Self::open(path)?);
        stores.retain(|_, weak| weak.strong_count() > 0);
        stores.insert(key, Arc::downgrade(&store));
        Ok(store)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let lock = path_lock(&self.path);
        let _guard = lock.lock();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::storage(format!("Failed to create '{}': {}", parent.display(), e))
            })?;
        }

        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| Error::storage(format!("Failed to serialize preferences: {}", e)))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, data).map_err(|e| {
            Error::storage(format!("Failed to write '{}': {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::storage(format!("Failed to replace '{}': {}", self.path.display(), e))
        })?;

        trace!("Persisted {} preference entries", entries.len());
        Ok(())
    }
}

impl KeyValueStore for PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            // Keep memory consistent with disk
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        Ok(scan_map(&self.entries.read(), prefix))
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write();
        entries.clear();
        self.persist(&entries)
    }
}
