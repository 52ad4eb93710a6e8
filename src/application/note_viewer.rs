// src/application/note_viewer.rs
use crate::domain::{DomainError, NewNote, Note, NotePatch};

/// Storage of note records. Notes are returned in insertion order.
pub trait NoteRepository {
    /// Assign an id and timestamps, then store the note
    fn add_note(&mut self, new: NewNote) -> Result<Note, DomainError>;

    /// Merge the patch into an existing note and refresh `updated_at`
    fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<Note, DomainError>;

    /// Remove a note; `None` when nothing matched
    fn delete_note(&mut self, id: &str) -> Result<Option<Note>, DomainError>;

    fn get_note(&mut self, id: &str) -> Result<Note, DomainError>;

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn add_note(&mut self, new: NewNote) -> Result<Note, DomainError> {
        (**self).add_note(new)
    }

    fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<Note, DomainError> {
        (**self).update_note(id, patch)
    }

    fn delete_note(&mut self, id: &str) -> Result<Option<Note>, DomainError> {
        (**self).delete_note(id)
    }

    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        (**self).get_note(id)
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        (**self).list_notes()
    }
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, note_id: &str) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}
