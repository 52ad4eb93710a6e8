// src/util/testing.rs

use anyhow::Result;
use chrono::Utc;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, Note, NotePatch};

/// A note with fixed id and title and default everything else
pub fn sample_note(id: &str, title: &str) -> Note {
    Note::create(id.to_string(), NewNote::titled(title), Utc::now())
}

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// Notes keep insertion order. A configured storage failure makes every
/// call return `DomainError::Storage`.
///
/// # Examples
///
/// ```
/// use notebox::application::NoteRepository;
/// use notebox::util::testing::{sample_note, MockNoteRepository};
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note(sample_note("n-1", "Question"))
///     .build();
/// assert_eq!(mock.get_note("n-1").unwrap().title, "Question");
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    failure: Option<String>,
    next_id: usize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::Storage(message.clone())),
            None => Ok(()),
        }
    }
}

impl NoteRepository for MockNoteRepository {
    fn add_note(&mut self, new: NewNote) -> Result<Note, DomainError> {
        self.check_failure()?;
        self.next_id += 1;
        let note = Note::create(format!("mock-{}", self.next_id), new, Utc::now());
        self.notes.push(note.clone());
        Ok(note)
    }

    fn update_note(&mut self, id: &str, patch: NotePatch) -> Result<Note, DomainError> {
        self.check_failure()?;
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))?;
        note.apply(patch, Utc::now());
        Ok(note.clone())
    }

    fn delete_note(&mut self, id: &str) -> Result<Option<Note>, DomainError> {
        self.check_failure()?;
        let idx = self.notes.iter().position(|n| n.id == id);
        Ok(idx.map(|idx| self.notes.remove(idx)))
    }

    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        self.check_failure()?;
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.check_failure()?;
        Ok(self.notes.clone())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    failure: Option<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            failure: None,
        }
    }

    /// Add a note that can be retrieved, listed and deleted
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every repository call fail with a storage error
    pub fn with_storage_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            failure: self.failure,
            next_id: 0,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Filter out noisy dependencies
    let noisy_modules = ["mio", "tokio", "runtime"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
