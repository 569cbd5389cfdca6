use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::RecordStore;
use crate::error::StoreError;

/// Store backed by a single JSON object file mapping keys to raw values.
///
/// The whole file is rewritten on every mutation: serialized into a
/// temporary file next to the target, flushed, then renamed over it, so a
/// crash never leaves a half-written store behind.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; a file
    /// that is not a JSON object of strings is rejected.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|err| StoreError::Corrupt {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Store file missing, starting empty");
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut tmp, &self.entries)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        tracing::trace!(path = %self.path.display(), keys = self.entries.len(), "Store flushed");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
