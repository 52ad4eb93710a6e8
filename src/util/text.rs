// src/util/text.rs
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    // Block-level tags that end a line of text
    static ref BLOCK_TAG_REGEX: Regex =
        Regex::new(r"(?i)<(/?)(p|div|br|li|ul|ol|blockquote|pre|h[1-6])\b[^>]*>")
            .expect("Failed to compile block tag regex");

    // Element tags and comments; a bare '<' in running text is not a tag
    static ref TAG_REGEX: Regex = Regex::new(r"<(?:/?[A-Za-z][^<>]*|!--[\s\S]*?--)>")
        .expect("Failed to compile tag regex");

    static ref BLANK_RUN_REGEX: Regex = Regex::new(r"\n{3,}")
        .expect("Failed to compile blank run regex");

    static ref NON_ALNUM_REGEX: Regex = Regex::new(r"[^A-Za-z0-9]")
        .expect("Failed to compile filename regex");
}

/// Convert rich-text markup to plain text.
///
/// Closing block elements and `<br>` end a line, other tags are dropped,
/// entities are decoded after tag removal (so an encoded `&lt;b&gt;` survives
/// as text) and runs of blank lines collapse to a single empty line.
///
/// # Examples
///
/// ```
/// use notebox::util::text::markup_to_plain_text;
///
/// let html = "<h1>Plan</h1><p>Buy <strong>milk</strong> &amp; eggs</p>";
/// assert_eq!(markup_to_plain_text(html), "Plan\nBuy milk & eggs");
/// ```
pub fn markup_to_plain_text(html: &str) -> String {
    let with_newlines = break_block_elements(html);
    let no_tags = TAG_REGEX.replace_all(&with_newlines, "");
    let decoded = decode_html_entities(&no_tags).replace('\u{a0}', " ");

    let lines: Vec<&str> = decoded.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    BLANK_RUN_REGEX
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

fn break_block_elements(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for caps in BLOCK_TAG_REGEX.captures_iter(html) {
        let Some(tag) = caps.get(0) else { continue };
        out.push_str(&html[last..tag.start()]);
        last = tag.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let line_break = caps
            .get(2)
            .is_some_and(|m| m.as_str().eq_ignore_ascii_case("br"));
        if closing || line_break {
            out.push('\n');
        } else if !out.is_empty() && !out.ends_with('\n') {
            // an opening block starts on its own line
            out.push('\n');
        }
    }
    out.push_str(&html[last..]);
    out
}

/// Extract the first line of plain text from HTML content.
///
/// # Examples
///
/// ```
/// use notebox::util::text::extract_first_line;
///
/// let html = "<p>What is a Tree?</p><p>Second line</p>";
/// let first_line = extract_first_line(html);
/// assert_eq!(first_line, "What is a Tree?");
/// ```
pub fn extract_first_line(html: &str) -> String {
    markup_to_plain_text(html)
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Number of whitespace-separated words in the plain-text rendering.
pub fn word_count(html: &str) -> usize {
    markup_to_plain_text(html).split_whitespace().count()
}

/// File-system safe stem: every non-alphanumeric ASCII character becomes `_`,
/// the result is lowercased and falls back to `untitled` when empty.
pub fn sanitize_filename(title: &str) -> String {
    let sanitized = NON_ALNUM_REGEX.replace_all(title, "_").to_lowercase();
    if sanitized.is_empty() {
        "untitled".to_string()
    } else {
        sanitized
    }
}

/// Note title derived from an imported file: the file name without its last
/// extension, or the whole name when nothing would remain.
pub fn title_from_file_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[..idx].to_string(),
        _ => name,
    }
}
