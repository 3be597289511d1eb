//! Process-wide locks keyed by file path

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

static PATH_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Get the lock guarding `path`
///
/// Every caller asking for the same path gets the same mutex, so one-time
/// work on a file (extracting an asset, rewriting a cache) is serialized
/// within the process.
pub fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    let key = normalize(path);
    Arc::clone(PATH_LOCKS.lock().entry(key).or_default())
}

pub(crate) fn normalize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_same_lock() {
        let a = path_lock(Path::new("/tmp/devicename/android-devices.db"));
        let b = path_lock(Path::new("/tmp/devicename/android-devices.db"));
        let c = path_lock(Path::new("/tmp/devicename/device-names.json"));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn test_lock_serializes_work() {
        let path = PathBuf::from("/tmp/devicename/serialized");
        let counter = Arc::new(Mutex::new(Vec::new()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let path = path.clone();
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    let lock = path_lock(&path);
                    let _guard = lock.lock();
                    counter.lock().push(i);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.lock().len(), 4);
    }
}
