//! Shared state structs for event processing.
//!
//! These track context while walking the parser's event stream and are
//! shared between the HTML, TOC and LaTeX renderers.

use std::collections::HashMap;

use pulldown_cmark::{Alignment, HeadingLevel};

/// State for the code block currently being collected.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    attrs: HashMap<String, String>,
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with its fence info.
    pub(crate) fn start(&mut self, language: Option<String>, attrs: HashMap<String, String>) {
        self.active = true;
        self.language = language;
        self.attrs = attrs;
        self.buffer.clear();
    }

    /// End the block and return `(language, attrs, content)`.
    pub(crate) fn end(&mut self) -> (Option<String>, HashMap<String, String>, String) {
        self.active = false;
        (
            self.language.take(),
            std::mem::take(&mut self.attrs),
            std::mem::take(&mut self.buffer),
        )
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// State for table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Inline alignment style for the current cell.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for capturing image alt text.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// A finished heading with its deduplicated anchor id.
pub(crate) struct CompletedHeading {
    pub(crate) level: u8,
    pub(crate) id: String,
    pub(crate) text: String,
    pub(crate) html: String,
}

/// State for the heading currently being collected.
///
/// Tracks both a plain-text buffer (anchor slug, TOC entry, document title)
/// and an HTML buffer (inline formatting preserved), plus the per-document
/// counters that keep anchor ids unique.
#[derive(Default)]
pub(crate) struct HeadingState {
    current_level: Option<u8>,
    text: String,
    html: String,
    id_counts: HashMap<String, usize>,
    title: Option<String>,
}

impl HeadingState {
    pub(crate) fn start(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Finish the current heading.
    ///
    /// Ids are assigned for every heading so that duplicate slugs count the
    /// same in every output kind (`faq`, `faq-1`, ...). The first level-1
    /// heading is remembered as the document title.
    pub(crate) fn complete(&mut self) -> CompletedHeading {
        let level = self.current_level.take().unwrap_or(1);
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);

        if level == 1 && self.title.is_none() {
            self.title = Some(text.trim().to_owned());
        }

        let mut slug = slugify(&text);
        if slug.is_empty() {
            slug = "section".to_owned();
        }
        let counter = self.id_counts.entry(slug.clone()).or_insert(0);
        let id = if *counter == 0 {
            slug
        } else {
            format!("{slug}-{counter}")
        };
        *counter += 1;
        CompletedHeading {
            level,
            id,
            text,
            html,
        }
    }

    /// Title captured from the first level-1 heading, if any.
    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }
}

/// Convert a heading level enum to its number (1-6).
pub(crate) fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Per-document footnote numbering, assigned on first sight of a label.
#[derive(Default)]
pub(crate) struct FootnoteState {
    numbers: HashMap<String, usize>,
}

impl FootnoteState {
    pub(crate) fn number(&mut self, label: &str) -> usize {
        let next = self.numbers.len() + 1;
        *self.numbers.entry(label.to_owned()).or_insert(next)
    }
}

/// Split a fence info string into `(language, attrs)`.
///
/// The first whitespace-separated word without `=` is the language; words
/// of the form `key=value` become attributes.
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut language = String::new();
    let mut attrs = HashMap::new();
    for word in info.split_whitespace() {
        match word.split_once('=') {
            Some((key, value)) => {
                attrs.insert(key.to_owned(), value.to_owned());
            }
            None if language.is_empty() => language = word.to_owned(),
            None => {}
        }
    }
    (language, attrs)
}

/// Turn heading text into an anchor slug.
pub(crate) fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    slug
}

/// Escape HTML special characters into `out`.
pub(crate) fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        escape_html_char(out, c);
    }
}

pub(crate) fn escape_html_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("snake_case"), "snake-case");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_parse_fence_info() {
        let (language, attrs) = parse_fence_info("rust");
        assert_eq!(language, "rust");
        assert!(attrs.is_empty());

        let (language, attrs) = parse_fence_info("c caption=Bubble-sort lines=3");
        assert_eq!(language, "c");
        assert_eq!(attrs.get("caption").map(String::as_str), Some("Bubble-sort"));
        assert_eq!(attrs.get("lines").map(String::as_str), Some("3"));

        let (language, attrs) = parse_fence_info("");
        assert!(language.is_empty());
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_heading_ids_deduplicate() {
        let mut heading = HeadingState::default();
        let mut ids = Vec::new();
        for _ in 0..3 {
            heading.start(2);
            heading.push_text("FAQ");
            ids.push(heading.complete().id);
        }
        assert_eq!(ids, ["faq", "faq-1", "faq-2"]);
    }

    #[test]
    fn test_heading_empty_slug_falls_back() {
        let mut heading = HeadingState::default();
        heading.start(2);
        heading.push_text("!!!");
        assert_eq!(heading.complete().id, "section");
    }

    #[test]
    fn test_heading_title_is_first_h1() {
        let mut heading = HeadingState::default();
        heading.start(2);
        heading.push_text("Not a title");
        heading.complete();
        heading.start(1);
        heading.push_text("The Title");
        heading.complete();
        heading.start(1);
        heading.push_text("Second H1");
        heading.complete();
        assert_eq!(heading.take_title().as_deref(), Some("The Title"));
    }

    #[test]
    fn test_footnote_numbers_by_first_sight() {
        let mut footnotes = FootnoteState::default();
        assert_eq!(footnotes.number("a"), 1);
        assert_eq!(footnotes.number("b"), 2);
        assert_eq!(footnotes.number("a"), 1);
    }

    #[test]
    fn test_table_alignment_styles() {
        let mut table = TableState::default();
        table.start(vec![
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::None,
        ]);
        assert_eq!(table.current_alignment_style(), r#" style="text-align:left""#);
        table.next_cell();
        assert_eq!(
            table.current_alignment_style(),
            r#" style="text-align:center""#
        );
        table.next_cell();
        assert_eq!(
            table.current_alignment_style(),
            r#" style="text-align:right""#
        );
        table.next_cell();
        assert_eq!(table.current_alignment_style(), "");
    }
}
