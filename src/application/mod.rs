// src/application/mod.rs
pub mod note_deleter;
pub mod note_editor;
pub mod note_exporter;
pub mod note_lister;
pub mod note_uploader;
pub mod note_viewer;
pub mod remote;
pub mod settings_store;

pub use note_deleter::NoteDeleter;
pub use note_editor::NoteEditor;
pub use note_exporter::{ExportedFile, NoteExporter};
pub use note_lister::{FolderSummary, NoteFilter, NoteLister};
pub use note_uploader::{collect_files, NoteUploader, UploadOutcome, UploadStatus};
pub use note_viewer::{NoteRepository, NoteViewer};
pub use remote::{Authenticator, DriveSession, RemoteStorage};
pub use settings_store::{KeyValueStorage, SettingsStore};
