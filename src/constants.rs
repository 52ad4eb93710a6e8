// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Key under which the settings blob is stored in the key-value storage.
///
/// Used in: `application/settings_store.rs`
pub const SETTINGS_KEY: &str = "settings";

/// File name of the durable notes store inside the data directory.
///
/// Used in: `infrastructure/json_store.rs`
pub const NOTES_FILE_NAME: &str = "notes.json";

/// Folder assigned to notes created without one.
pub const DEFAULT_FOLDER: &str = "Personal";

/// Folder assigned to notes imported from local files.
///
/// Used in: `application/note_uploader.rs`
pub const UPLOADS_FOLDER: &str = "Uploads";

/// Folders offered by default; the data model accepts any label.
pub const SUGGESTED_FOLDERS: [&str; 4] = ["Personal", "Work", "Ideas", "Archive"];

/// Title given to notes created without one.
pub const UNTITLED_TITLE: &str = "Untitled Note";

/// Inclusive bounds for the editor font size.
pub const FONT_SIZE_MIN: u8 = 12;
pub const FONT_SIZE_MAX: u8 = 24;

/// Extension of exported note documents.
///
/// Used in: `application/note_exporter.rs`
pub const EXPORT_EXTENSION: &str = "md";

/// Simulated latencies of the drive stub, in milliseconds.
///
/// Used in: `infrastructure/drive_stub.rs`, `config.rs`
pub const DRIVE_UPLOAD_DELAY_MS: u64 = 2000;
pub const DRIVE_DOWNLOAD_DELAY_MS: u64 = 1000;
pub const DRIVE_LIST_DELAY_MS: u64 = 1000;
pub const DRIVE_DELETE_DELAY_MS: u64 = 500;
pub const DRIVE_SIGN_IN_DELAY_MS: u64 = 300;

/// Placeholder identity-provider client id; no real sign-in happens.
pub const PLACEHOLDER_CLIENT_ID: &str = "YOUR_GOOGLE_CLIENT_ID";

/// Delay in milliseconds after writing the HTML file before returning.
///
/// The browser needs a brief moment to pick up the file before the temp
/// directory can be released.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
