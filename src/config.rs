// src/config.rs
use crate::constants::{
    DEFAULT_FOLDER, DRIVE_DELETE_DELAY_MS, DRIVE_DOWNLOAD_DELAY_MS, DRIVE_LIST_DELAY_MS,
    DRIVE_SIGN_IN_DELAY_MS, DRIVE_UPLOAD_DELAY_MS, PLACEHOLDER_CLIENT_ID,
};
use crate::infrastructure::DriveStubConfig;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// TOML configuration for notebox
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub drive: DriveConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NotesConfig {
    #[serde(default = "default_folder")]
    pub default_folder: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DriveConfig {
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default = "default_upload_delay")]
    pub upload_delay_ms: u64,
    #[serde(default = "default_download_delay")]
    pub download_delay_ms: u64,
    #[serde(default = "default_list_delay")]
    pub list_delay_ms: u64,
    #[serde(default = "default_delete_delay")]
    pub delete_delay_ms: u64,
    #[serde(default = "default_sign_in_delay")]
    pub sign_in_delay_ms: u64,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notebox")
}
fn default_folder() -> String { DEFAULT_FOLDER.to_string() }
fn default_client_id() -> String { PLACEHOLDER_CLIENT_ID.to_string() }
fn default_upload_delay() -> u64 { DRIVE_UPLOAD_DELAY_MS }
fn default_download_delay() -> u64 { DRIVE_DOWNLOAD_DELAY_MS }
fn default_list_delay() -> u64 { DRIVE_LIST_DELAY_MS }
fn default_delete_delay() -> u64 { DRIVE_DELETE_DELAY_MS }
fn default_sign_in_delay() -> u64 { DRIVE_SIGN_IN_DELAY_MS }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_folder: default_folder(),
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            upload_delay_ms: default_upload_delay(),
            download_delay_ms: default_download_delay(),
            list_delay_ms: default_list_delay(),
            delete_delay_ms: default_delete_delay(),
            sign_in_delay_ms: default_sign_in_delay(),
        }
    }
}

impl DriveConfig {
    pub fn to_stub_config(&self) -> DriveStubConfig {
        DriveStubConfig {
            client_id: self.client_id.clone(),
            upload_delay: Duration::from_millis(self.upload_delay_ms),
            download_delay: Duration::from_millis(self.download_delay_ms),
            list_delay: Duration::from_millis(self.list_delay_ms),
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            sign_in_delay: Duration::from_millis(self.sign_in_delay_ms),
        }
    }
}

impl AppConfig {
    /// Default location: `<config dir>/notebox/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notebox").join("config.toml"))
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Load the file if it exists, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Write a default config file, refusing to replace one unless forced
    pub fn init(path: impl AsRef<Path>, force: bool) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() && !force {
            bail!(
                "Config file {} already exists, use --force to overwrite",
                path.display()
            );
        }
        let config = Self::default();
        config.save(path)?;
        debug!(path = %path.display(), "Wrote default config");
        Ok(config)
    }
}
