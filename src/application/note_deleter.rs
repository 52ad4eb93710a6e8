// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use tracing::debug;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note immediately and irrevocably.
    ///
    /// Deleting an unknown id is a no-op and returns `None`.
    pub fn delete_note(&mut self, note_id: &str) -> Result<Option<Note>, DomainError> {
        let removed = self.repository.delete_note(note_id)?;
        if removed.is_none() {
            debug!(note_id, "Nothing to delete");
        }
        Ok(removed)
    }
}
