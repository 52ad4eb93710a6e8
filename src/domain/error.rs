// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Remote storage error: {0}")]
    Remote(String),
    #[error("Operation cancelled")]
    Cancelled,
}
