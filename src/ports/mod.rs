// src/ports/mod.rs
pub mod html;
pub mod plain_text;

pub use html::HtmlPresenter;
pub use plain_text::PlainTextPresenter;
