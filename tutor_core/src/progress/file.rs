//! File-backed progress store - one JSON snapshot per profile.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{ProgressStore, StoreValue};

/// Progress store persisted as a single JSON snapshot on disk.
///
/// The snapshot is rewritten after every `set`. A missing or corrupt snapshot
/// is treated as empty, and write failures are logged and swallowed, so a
/// full disk never interrupts play.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, StoreValue>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing snapshot.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self { path, entries }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> HashMap<String, StoreValue> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %path.display(), %err, "no progress snapshot; starting fresh");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), %err, "progress snapshot unreadable; starting fresh");
                HashMap::new()
            }
        }
    }

    fn flush(&self) {
        let text = match serde_json::to_string_pretty(&self.entries) {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "could not encode progress snapshot");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, text) {
            warn!(path = %self.path.display(), %err, "could not write progress snapshot");
        }
    }
}

impl ProgressStore for FileStore {
    fn set(&mut self, key: &str, value: StoreValue) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }

    fn get(&self, key: &str) -> Option<StoreValue> {
        self.entries.get(key).cloned()
    }
}
