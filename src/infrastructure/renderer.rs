// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered note pages to a private temp directory and opens them
#[derive(Debug, Default)]
pub struct BrowserPreview {
    // Keep the last temp dir alive until the preview is dropped
    temp_dir: Option<TempDir>,
}

impl BrowserPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_page(&mut self, html: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("notebox-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("note.html");
        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(html.as_bytes())
            .context("Failed to write note page")?;

        debug!(path = %file_path.display(), "Wrote note page");
        self.temp_dir = Some(temp_dir);
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn open(&self, path: &Path) -> Result<()> {
        open_command(path)
            .spawn()
            .context("Failed to open browser")?;

        // The browser must read the page before the temp dir goes away
        settle(Duration::from_millis(BROWSER_LAUNCH_DELAY_MS)).await;
        Ok(())
    }
}

/// Wait without holding the runtime thread
async fn settle(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
