// src/ports/html.rs
use crate::domain::{Note, Settings, Theme};
use crate::util::text::word_count;
use html_escape::encode_text;
use tracing::instrument;

const DARK_BACKGROUND: &str = "#1e1e1e";
const DARK_TEXT: &str = "#f5f5f7";
const LIGHT_TEXT: &str = "#1d1d1f";

/// Renders a note as a standalone page styled by the user's settings
#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    settings: Settings,
}

impl HtmlPresenter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn color_rules(&self) -> String {
        let light = format!(
            "body {{ background-color: {}; color: {LIGHT_TEXT}; }}",
            self.settings.background_color
        );
        let dark = format!("body {{ background-color: {DARK_BACKGROUND}; color: {DARK_TEXT}; }}");
        match self.settings.theme {
            Theme::Light => light,
            Theme::Dark => dark,
            Theme::Auto => format!("{light}\n        @media (prefers-color-scheme: dark) {{ {dark} }}"),
        }
    }

    fn render_meta(&self, note: &Note) -> String {
        if self.settings.distraction_free {
            return String::new();
        }

        let tags = if note.tags.is_empty() {
            "No tags".to_string()
        } else {
            note.tags
                .iter()
                .map(|t| format!(r#"<span class="tag">{}</span>"#, encode_text(t)))
                .collect::<Vec<_>>()
                .join("")
        };
        let words = if self.settings.show_word_count {
            format!("\n            <div>{} words</div>", word_count(&note.content))
        } else {
            String::new()
        };

        format!(
            r#"
        <div class="note-info">
            <div>Folder: {folder}</div>
            <div>Updated: {updated}</div>{words}
            <div class="tags">Tags: {tags}</div>
        </div>"#,
            folder = encode_text(&note.folder),
            updated = note.updated_at.format("%Y-%m-%d %H:%M"),
        )
    }

    #[instrument(level = "debug", skip_all, fields(note_id = %note.id))]
    pub fn render(&self, note: &Note) -> String {
        let title = encode_text(&note.title);
        let marker = if note.is_bookmarked { " ♥" } else { "" };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: "{font_family}", -apple-system, BlinkMacSystemFont, sans-serif;
            font-size: {font_size}px;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
        }}
        {colors}
        .note-info {{
            margin-top: 2rem;
            padding-top: 1rem;
            border-top: 1px solid #ddd;
            font-size: 0.8em;
            opacity: 0.7;
        }}
        .tag {{
            display: inline-block;
            padding: 2px 8px;
            margin-right: 4px;
            border-radius: 4px;
            background: rgba(127, 127, 127, 0.15);
        }}
    </style>
</head>
<body>
    <article>
        <h1>{title}{marker}</h1>
        <div class="content">{content}</div>{meta}
    </article>
</body>
</html>"#,
            font_family = self.settings.font_family.name(),
            font_size = self.settings.font_size,
            colors = self.color_rules(),
            content = note.content,
            meta = self.render_meta(note),
        )
    }
}
