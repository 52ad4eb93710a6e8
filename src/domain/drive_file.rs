// src/domain/drive_file.rs
use serde::{Deserialize, Serialize};

/// A file record as listed by remote storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub modified_time: String,
    pub size: String,
    pub web_view_link: String,
}
