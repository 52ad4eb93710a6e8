// src/infrastructure/json_store.rs
use crate::application::NoteRepository;
use crate::constants::NOTES_FILE_NAME;
use crate::domain::{DomainError, NewNote, Note, NotePatch};
use crate::infrastructure::InMemoryNoteRepository;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default, Serialize, Deserialize)]
struct NotesFile {
    notes: Vec<Note>,
}

/// Durable note store: the whole collection lives in one JSON file that is
/// rewritten atomically after every mutation.
#[derive(Debug)]
pub struct JsonNoteRepository {
    path: PathBuf,
    inner: InMemoryNoteRepository,
}

impl JsonNoteRepository {
    /// Open the store in `data_dir`, creating the directory if needed.
    /// A missing notes file means an empty collection.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        let path = data_dir.join(NOTES_FILE_NAME);

        let notes = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read notes file {}", path.display()))?;
            let file: NotesFile = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse notes file {}", path.display()))?;
            file.notes
        } else {
            debug!(?path, "No notes file yet");
            Vec::new()
        };

        info!(?path, count = notes.len(), "Opened notes store");
        Ok(Self {
            path,
            inner: InMemoryNoteRepository::from_notes(notes),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply the change to a copy and only adopt it once it is on disk.
    fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut InMemoryNoteRepository) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut staged = self.inner.clone();
        let result = change(&mut staged)?;
        self.save(staged.notes())
            .map_err(|e| DomainError::Storage(format!("{e:#}")))?;
        self.inner = staged;
        Ok(result)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("Notes file has no parent directory")?;
        let json = serde_json::to_string_pretty(&NotesFile {
            notes: notes.to_vec(),
        })
        .context("Failed to serialize notes")?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)
            .context("Failed to create temporary notes file")?;
        temp.write_all(json.as_bytes())
            .context("Failed to write temporary notes file")?;
        temp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl NoteRepository for JsonNoteRepository {
    fn add_note(&mut self, new: NewNote) -> Result<Note, DomainError> {
        self.mutate(|notes| notes.add_note(new))
    }

    fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<Note, DomainError> {
        self.mutate(|notes| notes.update_note(id, patch))
    }

    fn delete_note(&mut self, id: &str) -> Result<Option<Note>, DomainError> {
        if self.inner.get_note(id).is_err() {
            return Ok(None);
        }
        self.mutate(|notes| notes.delete_note(id))
    }

    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        self.inner.get_note(id)
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.inner.list_notes()
    }
}
