use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use kino_logging::kino_warn;
use tempfile::NamedTempFile;

use crate::{KeyValueStore, StoreError};

/// Durable store kept as a flat JSON object of string values.
///
/// Every write rewrites the whole file through a temp file and rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let dir = self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(items)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<PathBuf, StoreError> {
        if self.path.is_dir() {
            return Err(StoreError::Unavailable(format!(
                "{} is a directory",
                self.path.display()
            )));
        }
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if dir.exists() {
            if !dir.is_dir() {
                return Err(StoreError::Unavailable(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
        } else {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(StoreError::Serialize(err)) => {
                kino_warn!("Overwriting malformed store {:?}: {}", self.path, err);
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }
}
