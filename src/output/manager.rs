// Wed Oct 14 2026 - Alex

use crate::error::Result;
use crate::output::store::{FsStore, OutputStore};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Change-tracked writer for generated artifacts.
pub struct OutputManager {
    store: Box<dyn OutputStore>,
    root: PathBuf,
    backup_enabled: bool,
    tracked: Vec<PathBuf>,
    written: usize,
    unchanged: usize,
}

impl OutputManager {
    pub fn new(store: Box<dyn OutputStore>, root: PathBuf) -> Self {
        Self {
            store,
            root,
            backup_enabled: false,
            tracked: Vec::new(),
            written: 0,
            unchanged: 0,
        }
    }

    pub fn on_disk(root: PathBuf) -> Self {
        Self::new(Box::new(FsStore::new()), root)
    }

    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.backup_enabled = enabled;
        self
    }

    /// Writes `content` to `root/dir/filename` unless it is already there.
    /// Returns whether the file changed. Tracked paths end up in the
    /// manifest.
    pub fn update_file(&mut self, dir: &Path, filename: &str, content: &str, track: bool) -> Result<bool> {
        let relative = dir.join(filename);
        let path = self.root.join(&relative);

        if track {
            self.tracked.push(relative);
        }

        let existing = self.store.read(&path)?.unwrap_or_default();
        if existing == content {
            log::info!("{}... up-to-date.", filename);
            self.unchanged += 1;
            return Ok(false);
        }

        if self.backup_enabled && !existing.is_empty() {
            let backup = self.store.backup(&path, &existing)?;
            log::debug!("backed up {} to {}", path.display(), backup.display());
        }

        self.store.write(&path, content)?;
        log::info!("{}... updated.", filename);
        self.written += 1;
        Ok(true)
    }

    /// Tracked paths relative to the root, `/`-separated, sorted and
    /// deduplicated.
    pub fn tracked_paths(&self) -> Vec<String> {
        self.tracked
            .iter()
            .map(|p| p.components().map(|c| c.as_os_str().to_string_lossy()).join("/"))
            .sorted()
            .dedup()
            .collect()
    }

    pub fn written_count(&self) -> usize {
        self.written
    }

    pub fn unchanged_count(&self) -> usize {
        self.unchanged
    }

    pub fn summary(&self) -> OutputSummary {
        OutputSummary {
            written: self.written,
            unchanged: self.unchanged,
            tracked: self.tracked_paths().len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSummary {
    pub written: usize,
    pub unchanged: usize,
    pub tracked: usize,
}

impl OutputSummary {
    pub fn display(&self) -> String {
        format!(
            "Updated: {}, Up-to-date: {}, Tracked: {}",
            self.written, self.unchanged, self.tracked
        )
    }
}
