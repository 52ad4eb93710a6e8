// src/infrastructure/mod.rs
pub mod drive_stub;
pub mod json_store;
pub mod kv_storage;
pub mod memory;
pub mod renderer;

pub use drive_stub::{DriveStub, DriveStubConfig};
pub use json_store::JsonNoteRepository;
pub use kv_storage::{FileKeyValueStorage, MemoryKeyValueStorage};
pub use memory::InMemoryNoteRepository;
pub use renderer::BrowserPreview;
