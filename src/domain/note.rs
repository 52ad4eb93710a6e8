// src/domain/note.rs
use crate::constants::{DEFAULT_FOLDER, UNTITLED_TITLE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub folder: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_bookmarked: bool,
    pub is_shared: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields supplied when creating a note; everything else is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub folder: String,
    pub is_bookmarked: bool,
    pub is_shared: bool,
    pub drive_file_id: Option<String>,
    pub description: Option<String>,
}

impl Default for NewNote {
    fn default() -> Self {
        Self {
            title: UNTITLED_TITLE.to_string(),
            content: String::new(),
            tags: vec![],
            folder: DEFAULT_FOLDER.to_string(),
            is_bookmarked: false,
            is_shared: false,
            drive_file_id: None,
            description: None,
        }
    }
}

impl NewNote {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder: Option<String>,
    pub is_bookmarked: Option<bool>,
    pub is_shared: Option<bool>,
    pub drive_file_id: Option<String>,
    pub description: Option<String>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Note {
    pub fn create(id: String, new: NewNote, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            tags: normalize_tags(new.tags),
            folder: normalize_folder(&new.folder),
            created_at: now,
            updated_at: now,
            is_bookmarked: new.is_bookmarked,
            is_shared: new.is_shared,
            drive_file_id: new.drive_file_id,
            description: new.description,
        }
    }

    /// Merge the patch into this note. The id and `created_at` never change and
    /// `updated_at` never moves backwards.
    pub fn apply(&mut self, patch: NotePatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_tags(tags);
        }
        if let Some(folder) = patch.folder {
            self.folder = normalize_folder(&folder);
        }
        if let Some(bookmarked) = patch.is_bookmarked {
            self.is_bookmarked = bookmarked;
        }
        if let Some(shared) = patch.is_shared {
            self.is_shared = shared;
        }
        if let Some(file_id) = patch.drive_file_id {
            self.drive_file_id = Some(file_id);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        self.updated_at = now.max(self.updated_at);
    }

    /// Tag membership ignores order and surrounding whitespace.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t == tag)
    }
}

/// Trim tags, drop blanks and duplicates, keep first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !result.iter().any(|t| t == tag) {
            result.push(tag.to_string());
        }
    }
    result
}

pub fn normalize_folder(folder: &str) -> String {
    let folder = folder.trim();
    if folder.is_empty() {
        DEFAULT_FOLDER.to_string()
    } else {
        folder.to_string()
    }
}
