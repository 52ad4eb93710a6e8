// src/infrastructure/memory.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, Note, NotePatch};
use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Notes held in process memory, in insertion order. Nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl NoteRepository for InMemoryNoteRepository {
    #[instrument(level = "debug", skip(self, new))]
    fn add_note(&mut self, new: NewNote) -> Result<Note, DomainError> {
        let note = Note::create(self.fresh_id(), new, Utc::now());
        debug!(note_id = %note.id, "Adding note");
        self.notes.push(note.clone());
        Ok(note)
    }

    #[instrument(level = "debug", skip(self, patch))]
    fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<Note, DomainError> {
        let idx = self
            .position(id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))?;
        let note = &mut self.notes[idx];
        note.apply(patch, Utc::now());
        Ok(note.clone())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<Option<Note>, DomainError> {
        Ok(self.position(id).map(|idx| self.notes.remove(idx)))
    }

    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn given_many_adds_when_listing_then_ids_are_unique_and_order_is_kept() {
        let mut repo = InMemoryNoteRepository::new();

        let ids: Vec<String> = (0..50)
            .map(|i| repo.add_note(NewNote::titled(format!("note {i}"))).unwrap().id)
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        let listed: Vec<String> = repo.list_notes().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn given_added_note_when_reading_then_updated_at_equals_created_at() {
        let mut repo = InMemoryNoteRepository::new();

        let note = repo.add_note(NewNote::default()).unwrap();

        assert_eq!(note.updated_at, note.created_at);
        assert!(note.tags.is_empty());
    }

    #[test]
    fn given_title_update_when_reading_then_title_changes_and_time_does_not_go_back() {
        let mut repo = InMemoryNoteRepository::new();
        let note = repo.add_note(NewNote::titled("Draft")).unwrap();

        repo.update_note(&note.id, NotePatch::title("X")).unwrap();

        let updated = repo.get_note(&note.id).unwrap();
        assert_eq!(updated.title, "X");
        assert!(updated.updated_at >= note.updated_at);
        assert_eq!(updated.created_at, note.created_at);
        assert_eq!(updated.id, note.id);
    }

    #[test]
    fn given_unknown_id_when_updating_then_signals_not_found_and_changes_nothing() {
        let mut repo = InMemoryNoteRepository::new();
        repo.add_note(NewNote::titled("Keep")).unwrap();
        let before = repo.list_notes().unwrap();

        let result = repo.update_note("missing", NotePatch::title("X"));

        assert!(matches!(result, Err(DomainError::NoteNotFound(_))));
        assert_eq!(repo.list_notes().unwrap(), before);
    }

    #[test]
    fn given_deleted_note_when_listing_then_id_is_absent() {
        let mut repo = InMemoryNoteRepository::new();
        let keep = repo.add_note(NewNote::titled("Keep")).unwrap();
        let gone = repo.add_note(NewNote::titled("Gone")).unwrap();

        let removed = repo.delete_note(&gone.id).unwrap();

        assert_eq!(removed.map(|n| n.id), Some(gone.id.clone()));
        let ids: Vec<String> = repo.list_notes().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![keep.id]);
    }

    #[test]
    fn given_unknown_id_when_deleting_then_is_noop() {
        let mut repo = InMemoryNoteRepository::new();
        repo.add_note(NewNote::titled("Keep")).unwrap();

        let removed = repo.delete_note("missing").unwrap();

        assert!(removed.is_none());
        assert_eq!(repo.notes().len(), 1);
    }
}
