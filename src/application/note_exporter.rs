// src/application/note_exporter.rs
use crate::application::NoteRepository;
use crate::constants::EXPORT_EXTENSION;
use crate::domain::{DomainError, Note};
use crate::ports::PlainTextPresenter;
use crate::util::text::sanitize_filename;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One written document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub note_id: String,
    pub path: PathBuf,
}

/// Writes notes out as plain-text documents, one file per note
pub struct NoteExporter<R: NoteRepository> {
    repository: R,
    presenter: PlainTextPresenter,
}

impl<R: NoteRepository> NoteExporter<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            presenter: PlainTextPresenter::new(),
        }
    }

    /// Export the given notes, or every note when `note_ids` is empty.
    ///
    /// All ids are resolved before anything is written, so an unknown id
    /// leaves the output directory untouched. Files already in `out_dir`
    /// are never overwritten.
    pub fn export(
        &mut self,
        note_ids: &[String],
        out_dir: &Path,
    ) -> Result<Vec<ExportedFile>, DomainError> {
        let notes: Vec<Note> = if note_ids.is_empty() {
            self.repository.list_notes()?
        } else {
            note_ids
                .iter()
                .map(|id| self.repository.get_note(id))
                .collect::<Result<_, _>>()?
        };

        std::fs::create_dir_all(out_dir).map_err(|e| {
            DomainError::Storage(format!("Failed to create {}: {e}", out_dir.display()))
        })?;

        let mut used_names = HashSet::new();
        let mut exported = Vec::with_capacity(notes.len());
        for note in &notes {
            let file_name = unique_file_name(&note.title, out_dir, &mut used_names);
            let path = out_dir.join(file_name);
            let document = self.presenter.render_document(note);

            File::options()
                .write(true)
                .create_new(true)
                .open(&path)
                .and_then(|mut file| file.write_all(document.as_bytes()))
                .map_err(|e| {
                    DomainError::Storage(format!("Failed to write {}: {e}", path.display()))
                })?;
            debug!(note_id = %note.id, path = %path.display(), "Exported note");

            exported.push(ExportedFile {
                note_id: note.id.clone(),
                path,
            });
        }

        info!(count = exported.len(), dir = %out_dir.display(), "Export finished");
        Ok(exported)
    }
}

/// `<sanitized title>.md`, suffixed `_2`, `_3`, ... when already taken in
/// this batch or present in `dir`
fn unique_file_name(title: &str, dir: &Path, used: &mut HashSet<String>) -> String {
    let stem = sanitize_filename(title);
    let mut candidate = format!("{stem}.{EXPORT_EXTENSION}");
    let mut counter = 2;
    while used.contains(&candidate) || dir.join(&candidate).exists() {
        candidate = format!("{stem}_{counter}.{EXPORT_EXTENSION}");
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}
