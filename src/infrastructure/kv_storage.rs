// src/infrastructure/kv_storage.rs
use crate::application::KeyValueStorage;
use crate::domain::DomainError;
use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Key-value storage backed by one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key);
        trace!(?path, "Writing key");
        let storage_error =
            |e: std::io::Error| DomainError::Storage(format!("Failed to write {}: {e}", path.display()));

        std::fs::create_dir_all(&self.dir).map_err(storage_error)?;
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir).map_err(storage_error)?;
        temp.write_all(value.as_bytes()).map_err(storage_error)?;
        temp.persist(&path).map_err(|e| storage_error(e.error))?;
        Ok(())
    }
}

/// Key-value storage kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStorage {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
