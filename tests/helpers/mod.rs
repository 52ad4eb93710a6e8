use anyhow::{Context, Result};
use notebox::application::SettingsStore;
use notebox::infrastructure::{FileKeyValueStorage, JsonNoteRepository};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for a throwaway data directory
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    /// Open the durable note store in this directory
    pub fn open_repository(&self) -> Result<JsonNoteRepository> {
        JsonNoteRepository::open(&self.data_dir)
    }

    /// Load the settings store backed by files in this directory
    pub fn open_settings(&self) -> Result<SettingsStore<FileKeyValueStorage>> {
        Ok(SettingsStore::load(FileKeyValueStorage::new(&self.data_dir))?)
    }

    /// Write a file below the fixture root and return its path
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Command line for this directory with a config path that does not exist yet
    pub fn args(&self, command: &[&str]) -> Vec<String> {
        let mut args = vec![
            "notebox".to_string(),
            "--data-dir".to_string(),
            self.data_dir.display().to_string(),
            "--config".to_string(),
            self.config_path().display().to_string(),
        ];
        args.extend(command.iter().map(|arg| arg.to_string()));
        args
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config").join("config.toml")
    }

    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }
}
