// src/application/note_uploader.rs
use crate::application::{NoteRepository, RemoteStorage};
use crate::constants::UPLOADS_FOLDER;
use crate::domain::{DomainError, NewNote};
use crate::util::text::title_from_file_name;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Success { note_id: String },
    Failed { reason: String },
}

/// Result of importing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub path: PathBuf,
    pub status: UploadStatus,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, UploadStatus::Success { .. })
    }
}

/// Imports local text files as notes, optionally mirroring them to remote storage
pub struct NoteUploader<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteUploader<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Import each file in order. A failing file is reported and the batch
    /// continues; cancellation stops the batch after the current file.
    #[instrument(level = "debug", skip_all, fields(files = paths.len()))]
    pub async fn upload_files(
        &mut self,
        paths: &[PathBuf],
        remote: Option<&dyn RemoteStorage>,
        cancel: &CancellationToken,
    ) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(paths.len());

        for path in paths {
            if cancel.is_cancelled() {
                warn!("Upload cancelled, {} file(s) skipped", paths.len() - outcomes.len());
                break;
            }

            let status = match self.upload_file(path, remote, cancel).await {
                Ok(note_id) => {
                    info!(path = %path.display(), %note_id, "Imported file");
                    UploadStatus::Success { note_id }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to import file");
                    UploadStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            outcomes.push(UploadOutcome {
                path: path.clone(),
                status,
            });
        }
        outcomes
    }

    async fn upload_file(
        &mut self,
        path: &Path,
        remote: Option<&dyn RemoteStorage>,
        cancel: &CancellationToken,
    ) -> Result<String, DomainError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::Storage(format!("Failed to read {}: {e}", path.display())))?;
        let content = String::from_utf8(bytes).map_err(|_| {
            DomainError::Storage(format!("{} is not valid UTF-8 text", path.display()))
        })?;

        let drive_file_id = match remote {
            Some(remote) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let file_id = remote.put(&name, content.as_bytes(), cancel).await?;
                debug!(%file_id, "Stored file remotely");
                Some(file_id)
            }
            None => None,
        };

        let new = NewNote {
            title: title_from_file_name(path),
            content,
            tags: vec![kind_tag(path).to_string()],
            folder: UPLOADS_FOLDER.to_string(),
            drive_file_id,
            ..Default::default()
        };
        Ok(self.repository.add_note(new)?.id)
    }
}

/// Media type guessed from the file extension
fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "txt" | "log" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "html" | "htm" => "text/html",
        "xml" => "text/xml",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "ics" => "text/calendar",
        "vtt" => "text/vtt",
        "rtf" => "text/rtf",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "odt" => "application/vnd.oasis.opendocument.text",
        _ => "application/octet-stream",
    }
}

/// `text` when the media type mentions text, `document` otherwise
fn kind_tag(path: &Path) -> &'static str {
    if mime_type(path).contains("text") {
        "text"
    } else {
        "document"
    }
}

/// Expand the selection: files are kept as given, directories contribute
/// their files (recursively when requested) in sorted order.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
            .follow_links(false)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();
        found.sort();
        files.extend(found);
    }
    files
}
