// src/application/note_editor.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, Note, NotePatch};
use tracing::{debug, info, instrument};

/// Create and mutate notes
pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(level = "debug", skip(self, new), fields(title = %new.title))]
    pub fn create_note(&mut self, new: NewNote) -> Result<Note, DomainError> {
        let note = self.repository.add_note(new)?;
        info!(note_id = %note.id, "Created note");
        Ok(note)
    }

    /// Save edits. An empty patch still refreshes `updated_at`.
    #[instrument(level = "debug", skip(self, patch))]
    pub fn edit_note(&mut self, note_id: &str, patch: NotePatch) -> Result<Note, DomainError> {
        if patch.is_empty() {
            debug!(note_id, "Saving note without field changes");
        }
        self.repository.update_note(note_id, patch)
    }

    pub fn toggle_bookmark(&mut self, note_id: &str) -> Result<Note, DomainError> {
        let current = self.repository.get_note(note_id)?;
        self.repository.update_note(
            note_id,
            NotePatch {
                is_bookmarked: Some(!current.is_bookmarked),
                ..Default::default()
            },
        )
    }

    pub fn toggle_share(&mut self, note_id: &str) -> Result<Note, DomainError> {
        let current = self.repository.get_note(note_id)?;
        self.repository.update_note(
            note_id,
            NotePatch {
                is_shared: Some(!current.is_shared),
                ..Default::default()
            },
        )
    }
}
