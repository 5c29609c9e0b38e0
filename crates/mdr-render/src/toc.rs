//! Standalone table-of-contents renderer.

use std::fmt::Write;

use pulldown_cmark::{Event, Tag, TagEnd};

use crate::document::Injection;
use crate::state::{CompletedHeading, HeadingState, escape_html, heading_level};

/// Renders only a nested list of heading links.
///
/// Headings deeper than `toc_level` are skipped and a `toc_level` of zero
/// produces no output at all. Anchor targets use the same slugs the HTML
/// renderer assigns, so a generated list links into a document rendered
/// from the same input.
pub struct HtmlTocRenderer {
    toc_level: u8,
    entries: Vec<CompletedHeading>,
    heading: HeadingState,
}

impl HtmlTocRenderer {
    #[must_use]
    pub fn new(toc_level: u8) -> Self {
        Self {
            toc_level,
            entries: Vec::new(),
            heading: HeadingState::default(),
        }
    }

    /// Render markdown events into `out`.
    pub fn render<'a, I>(&mut self, events: I, injection: &Injection, out: &mut String)
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        if let Some(header) = &injection.header {
            out.push_str(header);
        }
        self.build_list(out);
        if let Some(footer) = &injection.footer {
            out.push_str(footer);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.heading.start(heading_level(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                // Completing every heading keeps slug counters in step with
                // the HTML renderer even for headings left out of the list.
                let heading = self.heading.complete();
                if self.toc_level > 0 && heading.level <= self.toc_level {
                    self.entries.push(heading);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if self.heading.is_active() {
                    self.heading.push_text(&text);
                }
            }
            Event::SoftBreak => {
                if self.heading.is_active() {
                    self.heading.push_text(" ");
                }
            }
            _ => {}
        }
    }

    fn build_list(&self, out: &mut String) {
        let mut current: u8 = 0;
        let mut level_offset: Option<u8> = None;
        for entry in &self.entries {
            // The first collected heading defines list depth one, so a
            // document starting at h2 is not indented an extra level.
            let offset = *level_offset.get_or_insert(entry.level - 1);
            let level = entry.level.saturating_sub(offset).max(1);

            if level > current {
                while level > current {
                    out.push_str("<ul>\n<li>");
                    current += 1;
                }
            } else if level < current {
                out.push_str("</li>\n");
                while level < current {
                    out.push_str("</ul>\n</li>\n");
                    current -= 1;
                }
                out.push_str("<li>");
            } else {
                out.push_str("</li>\n<li>");
            }
            writeln!(
                out,
                r##"<a href="#{}">{}</a>"##,
                entry.id,
                escape_html(&entry.text)
            )
            .unwrap();
        }
        while current > 0 {
            out.push_str("</li>\n</ul>\n");
            current -= 1;
        }
    }
}
