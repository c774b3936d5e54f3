// Wed Oct 14 2026 - Alex

use crate::error::Result;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where generated content is persisted.
pub trait OutputStore: Send + Sync {
    /// `None` when nothing exists at `path`.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replaces the whole file, creating parent directories as needed.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Archives `content` next to `path` and returns the archive location.
    fn backup(&self, path: &Path, content: &str) -> Result<PathBuf>;
}

impl<T: OutputStore + ?Sized> OutputStore for Arc<T> {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write(path, content)
    }

    fn backup(&self, path: &Path, content: &str) -> Result<PathBuf> {
        (**self).backup(path, content)
    }
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// `{file}.{unix_secs}.bak`, with a counter when that name is taken.
fn backup_path(path: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    let secs = unix_secs();
    let file = path.to_string_lossy();

    let mut candidate = PathBuf::from(format!("{}.{}.bak", file, secs));
    let mut n = 1;
    while exists(&candidate) {
        candidate = PathBuf::from(format!("{}.{}.{}.bak", file, secs, n));
        n += 1;
    }
    candidate
}

pub fn is_backup(path: &Path) -> bool {
    path.extension().map(|e| e == "bak").unwrap_or(false)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl OutputStore for FsStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn backup(&self, path: &Path, content: &str) -> Result<PathBuf> {
        let target = backup_path(path, |p| p.exists());
        std::fs::write(&target, content)?;
        Ok(target)
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().insert(path.into(), content.to_string());
        self
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().keys().cloned().collect()
    }

    pub fn backups(&self) -> Vec<PathBuf> {
        self.files.lock().keys().filter(|p| is_backup(p)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }
}

impl OutputStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.get(path))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.files.lock().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn backup(&self, path: &Path, content: &str) -> Result<PathBuf> {
        let mut files = self.files.lock();
        let target = backup_path(path, |p| files.contains_key(p));
        files.insert(target.clone(), content.to_string());
        Ok(target)
    }
}

/// Reads through to disk, keeps every write in memory. Used for dry runs.
#[derive(Debug, Default)]
pub struct DryRunStore {
    overlay: MemoryStore,
}

impl DryRunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths that a real run would have written.
    pub fn pending(&self) -> Vec<PathBuf> {
        self.overlay.paths()
    }
}

impl OutputStore for DryRunStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match self.overlay.read(path)? {
            Some(content) => Ok(Some(content)),
            None => FsStore.read(path),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        log::debug!("dry run: skipping write of {}", path.display());
        self.overlay.write(path, content)
    }

    fn backup(&self, path: &Path, content: &str) -> Result<PathBuf> {
        let target = backup_path(path, |p| p.exists());
        self.overlay.write(&target, content)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_backup_names() {
        let store = MemoryStore::new();
        let path = Path::new("out/a.g.cs");

        let first = store.backup(path, "v1").unwrap();
        let second = store.backup(path, "v2").unwrap();

        assert_ne!(first, second);
        assert!(is_backup(&first));
        assert!(first.to_string_lossy().starts_with("out/a.g.cs."));
        assert_eq!(store.backups().len(), 2);
    }

    #[test]
    fn test_fs_store_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Interop/Classes.g/widget_t.g.cs");
        let store = FsStore::new();

        assert_eq!(store.read(&path).unwrap(), None);
        store.write(&path, "content").unwrap();
        assert_eq!(store.read(&path).unwrap().as_deref(), Some("content"));

        let backup = store.backup(&path, "content").unwrap();
        assert!(backup.exists());
        assert!(is_backup(&backup));
    }

    #[test]
    fn test_dry_run_store_leaves_disk_alone() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.g.cs");
        std::fs::write(&existing, "old").unwrap();

        let store = DryRunStore::new();
        assert_eq!(store.read(&existing).unwrap().as_deref(), Some("old"));

        store.write(&existing, "new").unwrap();
        store.write(&dir.path().join("b.g.cs"), "fresh").unwrap();

        assert_eq!(store.read(&existing).unwrap().as_deref(), Some("new"));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "old");
        assert!(!dir.path().join("b.g.cs").exists());
        assert_eq!(store.pending().len(), 2);
    }
}
