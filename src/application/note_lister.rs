// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use crate::util::text::markup_to_plain_text;

/// View-side selection over the full note list; the store itself never filters.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Case-insensitive match against title or plain-text content
    pub search: Option<String>,
    /// `None` means all folders
    pub folder: Option<String>,
    pub tag: Option<String>,
    pub bookmarked_only: bool,
    pub shared_only: bool,
}

impl NoteFilter {
    pub fn matches(&self, note: &Note) -> bool {
        if self.bookmarked_only && !note.is_bookmarked {
            return false;
        }
        if self.shared_only && !note.is_shared {
            return false;
        }
        if let Some(folder) = &self.folder {
            if note.folder != *folder {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !note.has_tag(tag) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                note.title.to_lowercase().contains(&query)
                    || markup_to_plain_text(&note.content)
                        .to_lowercase()
                        .contains(&query)
            }
        }
    }
}

/// Per-folder note count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub name: String,
    pub count: usize,
}

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List notes matching the filter, in store order
    pub fn list_notes(&mut self, filter: &NoteFilter) -> Result<Vec<Note>, DomainError> {
        Ok(self
            .repository
            .list_notes()?
            .into_iter()
            .filter(|note| filter.matches(note))
            .collect())
    }

    /// Folders in use, with the suggested folders always listed first
    pub fn folders(&mut self, suggested: &[&str]) -> Result<Vec<FolderSummary>, DomainError> {
        let mut summaries: Vec<FolderSummary> = suggested
            .iter()
            .map(|name| FolderSummary {
                name: name.to_string(),
                count: 0,
            })
            .collect();

        for note in self.repository.list_notes()? {
            match summaries.iter_mut().find(|s| s.name == note.folder) {
                Some(summary) => summary.count += 1,
                None => summaries.push(FolderSummary {
                    name: note.folder,
                    count: 1,
                }),
            }
        }
        Ok(summaries)
    }
}
