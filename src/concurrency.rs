//! Write serialization for shared data files
//!
//! Every mutating store operation is a read-modify-write of the whole file. Two such
//! cycles on the same file must not interleave or one update is lost, so writers take
//! an exclusive per-path lock for the whole cycle. Readers never lock: the file is
//! replaced atomically, so a reader always sees one complete collection.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, Weak};

/// Per-path lock manager
///
/// Hands out one lock per file path so that store handles opened separately on the same
/// file still exclude each other, while writers to different files proceed in parallel.
/// Entries are weak: a lock lives as long as some handle holds it, and dead entries are
/// pruned on the next insert.
pub struct PathLockManager {
    /// Map from absolute file path to that file's writer lock
    locks: RwLock<HashMap<PathBuf, Weak<Mutex<()>>>>,
}

impl PathLockManager {
    pub fn new() -> Self {
        Self {
            locks: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide manager shared by every store handle.
    pub fn global() -> &'static PathLockManager {
        static GLOBAL: OnceLock<PathLockManager> = OnceLock::new();
        GLOBAL.get_or_init(PathLockManager::new)
    }

    /// Get or create the writer lock for a path
    ///
    /// Callers should pass an absolute path; two spellings of the same file get two
    /// different locks.
    pub fn get_lock(&self, path: &Path) -> Arc<Mutex<()>> {
        if let Some(lock) = self.locks.read().get(path).and_then(Weak::upgrade) {
            return lock;
        }

        let mut map = self.locks.write();
        // Another thread may have inserted it between the two acquisitions
        if let Some(lock) = map.get(path).and_then(Weak::upgrade) {
            return lock;
        }
        map.retain(|_, lock| lock.strong_count() > 0);
        let lock = Arc::new(Mutex::new(()));
        map.insert(path.to_path_buf(), Arc::downgrade(&lock));
        lock
    }

    /// Number of paths currently tracked, live or not yet pruned.
    pub fn tracked_paths(&self) -> usize {
        self.locks.read().len()
    }
}

impl Default for PathLockManager {
    fn default() -> Self {
        Self::new()
    }
}
