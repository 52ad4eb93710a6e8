// src/ports/plain_text.rs
use crate::domain::{Note, Settings};
use crate::util::text::{extract_first_line, markup_to_plain_text, word_count};

const PREVIEW_CHARS: usize = 60;

/// Plain-text renderings for the terminal and for exported documents
#[derive(Debug, Default, Clone)]
pub struct PlainTextPresenter;

impl PlainTextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// The exported document: title heading, plain content and a trailer
    pub fn render_document(&self, note: &Note) -> String {
        format!(
            "# {title}\n\n{content}\n\n---\nTags: {tags}\nFolder: {folder}\nCreated: {created}\nUpdated: {updated}",
            title = note.title,
            content = markup_to_plain_text(&note.content),
            tags = note.tags.join(", "),
            folder = note.folder,
            created = note.created_at.format("%Y-%m-%d"),
            updated = note.updated_at.format("%Y-%m-%d"),
        )
    }

    /// One line per note: id, flags, folder, title and a content preview
    pub fn render_list_line(&self, note: &Note) -> String {
        let flags = format!(
            "{}{}",
            if note.is_bookmarked { '♥' } else { ' ' },
            if note.is_shared { '⇪' } else { ' ' }
        );
        let preview = truncate(&extract_first_line(&note.content), PREVIEW_CHARS);
        if preview.is_empty() {
            format!("{}\t{}\t[{}]\t{}", note.id, flags, note.folder, note.title)
        } else {
            format!(
                "{}\t{}\t[{}]\t{}\t{}",
                note.id, flags, note.folder, note.title, preview
            )
        }
    }

    /// Full view of one note; metadata is hidden in distraction-free mode
    pub fn render_detail(&self, note: &Note, settings: &Settings) -> String {
        let mut out = format!("{}\n\n{}\n", note.title, markup_to_plain_text(&note.content));
        if settings.distraction_free {
            return out;
        }

        out.push_str("\n---\n");
        out.push_str(&format!("Id: {}\n", note.id));
        out.push_str(&format!("Folder: {}\n", note.folder));
        if !note.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", note.tags.join(", ")));
        }
        if let Some(description) = &note.description {
            out.push_str(&format!("Description: {description}\n"));
        }
        out.push_str(&format!("Bookmarked: {}\n", yes_no(note.is_bookmarked)));
        out.push_str(&format!("Shared: {}\n", yes_no(note.is_shared)));
        if let Some(file_id) = &note.drive_file_id {
            out.push_str(&format!("Drive file: {file_id}\n"));
        }
        out.push_str(&format!(
            "Created: {}\nUpdated: {}\n",
            note.created_at.format("%Y-%m-%d %H:%M"),
            note.updated_at.format("%Y-%m-%d %H:%M")
        ));
        if settings.show_word_count {
            out.push_str(&format!("Words: {}\n", word_count(&note.content)));
        }
        out
    }

    pub fn render_settings(&self, settings: &Settings) -> String {
        format!(
            "Font size: {}\nFont family: {}\nTheme: {}\nBackground: {}\nDistraction free: {}\nAuto save: {}\nWord count: {}",
            settings.font_size,
            settings.font_family.name(),
            settings.theme,
            settings.background_color,
            yes_no(settings.distraction_free),
            yes_no(settings.auto_save),
            yes_no(settings.show_word_count),
        )
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
