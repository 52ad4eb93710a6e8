// src/domain/mod.rs
pub mod drive_file;
pub mod error;
pub mod note;
pub mod settings;
pub mod user;

pub use drive_file::DriveFile;
pub use error::DomainError;
pub use note::{NewNote, Note, NotePatch};
pub use settings::{FontFamily, Settings, SettingsPatch, Theme};
pub use user::User;
