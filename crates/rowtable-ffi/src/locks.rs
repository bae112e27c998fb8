//! Per-path serialization of table operations

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One lock per table path.
///
/// Each boundary call opens, changes and saves the whole file; holding the
/// path's lock for the call keeps two threads from interleaving those steps.
/// Spellings of one file (relative, `..`, symlinked) share a lock, and an
/// entry is dropped once no call holds or waits on it. Locks are only shared
/// within the process.
#[derive(Debug, Default)]
pub struct PathLocks {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl PathLocks {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `path`
    pub fn with_lock<T>(&self, path: &Path, f: impl FnOnce() -> T) -> T {
        let key = lock_key(path);
        let lock = self.acquire(&key);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };
        self.release(&key, lock);
        result
    }

    /// Number of paths currently locked or waited on
    pub fn len(&self) -> usize {
        self.map().len()
    }

    /// Whether no path is locked or waited on
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<Mutex<()>>>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn acquire(&self, key: &Path) -> Arc<Mutex<()>> {
        Arc::clone(self.map().entry(key.to_path_buf()).or_default())
    }

    fn release(&self, key: &Path, lock: Arc<Mutex<()>>) {
        let mut locks = self.map();
        // Clones are only taken under the map lock, so the count is stable here:
        // two means the map's and ours.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(key);
        }
    }
}

/// The key `path` is locked under: absolute, with symlinks and `..` resolved
/// as far as the file system allows
fn lock_key(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    canonical(&absolute)
        .or_else(|| canonical(&normalize(&absolute)))
        .unwrap_or_else(|| normalize(&absolute))
}

/// The canonical form of `path`, or of its directory when the file does not exist yet
fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok().or_else(|| {
        let dir = fs::canonicalize(path.parent()?).ok()?;
        Some(dir.join(path.file_name()?))
    })
}

/// Drop `.` and fold `..` without touching the file system
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
