//! Full-document HTML renderer.

use std::collections::HashMap;
use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Tag, TagEnd};

use mdr_flags::{Extensions, FlagSet, RenderFlags};

use crate::document::Injection;
use crate::localization::Localization;
use crate::spans;
use crate::state::{
    CodeBlockState, FootnoteState, HeadingState, ImageState, TableState, escape_html,
    escape_html_into, heading_level, parse_fence_info,
};

/// Renders a markdown event stream to an HTML document.
///
/// Grammar toggles come from the extension bits and output toggles from the
/// render bits of the [`FlagSet`] given at construction. Headings at or below
/// `toc_level` get `id` anchors (all of them when `toc_level` is zero), using
/// the same slugs the table-of-contents renderer produces.
pub struct HtmlRenderer {
    flags: FlagSet,
    toc_level: u8,
    labels: Localization,
    body: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    footnotes: FootnoteState,
    pending_image: Option<(String, String)>,
    quote_open: bool,
    figure_count: usize,
    listing_count: usize,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(flags: FlagSet, toc_level: u8, labels: Localization) -> Self {
        Self {
            flags,
            toc_level,
            labels,
            body: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::default(),
            footnotes: FootnoteState::default(),
            pending_image: None,
            quote_open: false,
            figure_count: 0,
            listing_count: 0,
        }
    }

    /// Render markdown events into `out`.
    ///
    /// When `injection` carries a header or footer the body is wrapped in a
    /// complete document shell with the injected fragments placed in `<head>`
    /// and at the end of `<body>`. An empty injection appends the bare body.
    pub fn render<'a, I>(&mut self, events: I, injection: &Injection, out: &mut String)
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        self.finish(injection, out);
    }

    fn finish(&mut self, injection: &Injection, out: &mut String) {
        if self.quote_open {
            self.body.push_str("</q>");
            self.quote_open = false;
        }
        let body = std::mem::take(&mut self.body);
        if injection.is_empty() {
            out.push_str(&body);
            return;
        }

        let xhtml = self.flags.render.contains(RenderFlags::XHTML);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str(if xhtml {
            "<meta charset=\"utf-8\"/>\n"
        } else {
            "<meta charset=\"utf-8\">\n"
        });
        let title = self
            .heading
            .take_title()
            .unwrap_or_else(|| "Document".to_owned());
        writeln!(out, "<title>{}</title>", escape_html(&title)).unwrap();
        if let Some(header) = &injection.header {
            out.push_str(header);
        }
        out.push_str("</head>\n<body>\n");
        out.push_str(&body);
        if let Some(footer) = &injection.footer {
            out.push_str(footer);
        }
        out.push_str("</body>\n</html>\n");
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.line_break(),
            Event::Rule => self.horizontal_rule(),
            Event::FootnoteReference(label) => self.footnote_reference(&label),
            Event::InlineMath(math) => self.inline_math(&math),
            Event::DisplayMath(math) => self.display_math(&math),
            Event::TaskListMarker(_) => {}
        }
    }

    /// Push content to the body or the heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.body.push_str(content);
        }
    }

    fn anchors_enabled(&self, level: u8) -> bool {
        self.toc_level == 0 || level <= self.toc_level
    }

    #[allow(clippy::too_many_lines)]
    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.is_active() {
                    self.body.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the ID is known.
                self.heading.start(heading_level(level));
            }
            Tag::BlockQuote(_) => {
                self.body.push_str("<blockquote>\n");
            }
            Tag::CodeBlock(kind) => {
                let (language, attrs) = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => {
                        let (language, attrs) = parse_fence_info(info);
                        (
                            if language.is_empty() {
                                None
                            } else {
                                Some(language)
                            },
                            attrs,
                        )
                    }
                    _ => (None, HashMap::new()),
                };
                self.code.start(language, attrs);
            }
            Tag::List(start) => match start {
                Some(1) => self.body.push_str("<ol>\n"),
                Some(n) => writeln!(self.body, r#"<ol start="{n}">"#).unwrap(),
                None => self.body.push_str("<ul>\n"),
            },
            Tag::Item => {
                self.body.push_str("<li>");
            }
            Tag::FootnoteDefinition(label) => {
                let n = self.footnotes.number(&label);
                write!(
                    self.body,
                    r#"<div class="footnote" id="fn-{n}"><sup>{n}</sup> "#
                )
                .unwrap();
            }
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.body.push_str("<table>\n");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.body.push_str("<thead>\n<tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.body.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.body, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => {
                if self.flags.extensions.contains(Extensions::UNDERLINE) {
                    self.push_inline("<u>");
                } else {
                    self.push_inline("<em>");
                }
            }
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<del>"),
            Tag::Link { dest_url, .. } => {
                let link_tag = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link_tag);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Collect alt text; the image is written in end_tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList | Tag::DefinitionListTitle | Tag::DefinitionListDefinition => {}
        }
    }

    #[allow(clippy::too_many_lines)]
    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                // Quote pairing does not carry across paragraphs.
                if self.quote_open {
                    self.body.push_str("</q>");
                    self.quote_open = false;
                }
                if !self.code.is_active() {
                    self.body.push_str("</p>\n");
                }
            }
            TagEnd::Heading(_) => {
                let heading = self.heading.complete();
                let content = heading.html.trim();
                if self.anchors_enabled(heading.level) {
                    writeln!(
                        self.body,
                        r#"<h{} id="{}">{}</h{}>"#,
                        heading.level, heading.id, content, heading.level
                    )
                    .unwrap();
                } else {
                    writeln!(
                        self.body,
                        "<h{}>{}</h{}>",
                        heading.level, content, heading.level
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => {
                self.body.push_str("</blockquote>\n");
            }
            TagEnd::CodeBlock => {
                let (language, attrs, content) = self.code.end();
                self.code_block(language.as_deref(), &attrs, &content);
            }
            TagEnd::List(ordered) => {
                self.body.push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
            }
            TagEnd::Item => {
                self.body.push_str("</li>\n");
            }
            TagEnd::FootnoteDefinition => {
                self.body.push_str("</div>\n");
            }
            TagEnd::Table => {
                self.body.push_str("</tbody>\n</table>\n");
            }
            TagEnd::TableHead => {
                self.body.push_str("</tr>\n</thead>\n<tbody>\n");
                self.table.end_head();
            }
            TagEnd::TableRow => {
                self.body.push_str("</tr>\n");
            }
            TagEnd::TableCell => {
                self.body.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => {
                if self.flags.extensions.contains(Extensions::UNDERLINE) {
                    self.push_inline("</u>");
                } else {
                    self.push_inline("</em>");
                }
            }
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</del>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    self.write_image(&src, &alt, &title);
                }
            }
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {}
        }
    }

    fn code_block(
        &mut self,
        language: Option<&str>,
        attrs: &HashMap<String, String>,
        content: &str,
    ) {
        if let Some(language) = language
            && let Some(class) = self.diagram_class(language)
        {
            write!(self.body, r#"<div class="{class}">"#).unwrap();
            escape_html_into(&mut self.body, content);
            self.body.push_str("</div>\n");
            return;
        }

        if self.flags.extensions.contains(Extensions::SCI)
            && let Some(caption) = attrs.get("caption")
        {
            self.listing_count += 1;
            let n = self.listing_count;
            write!(self.body, r#"<figure class="listing" id="listing-{n}">"#).unwrap();
            self.pre_code(language, content);
            writeln!(
                self.body,
                "<figcaption>{} {n}: {}</figcaption></figure>",
                escape_html(&self.labels.listing),
                escape_html(caption)
            )
            .unwrap();
            return;
        }

        self.pre_code(language, content);
    }

    fn pre_code(&mut self, language: Option<&str>, content: &str) {
        match language {
            Some(language) => write!(
                self.body,
                r#"<pre><code class="language-{}">"#,
                escape_html(language)
            )
            .unwrap(),
            None => self.body.push_str("<pre><code>"),
        }
        escape_html_into(&mut self.body, content);
        self.body.push_str("</code></pre>\n");
    }

    /// Fenced languages taken over by a client-side diagram library.
    fn diagram_class(&self, language: &str) -> Option<&'static str> {
        match language {
            "mermaid" if self.flags.render.contains(RenderFlags::MERMAID) => Some("mermaid"),
            "gnuplot" if self.flags.render.contains(RenderFlags::GNUPLOT) => Some("gnuplot"),
            "chart" if self.flags.render.contains(RenderFlags::CHARTS) => Some("chart"),
            _ => None,
        }
    }

    fn write_image(&mut self, src: &str, alt: &str, title: &str) {
        let close = if self.flags.render.contains(RenderFlags::XHTML) {
            "/>"
        } else {
            ">"
        };
        if self.flags.extensions.contains(Extensions::SCI) && !title.is_empty() {
            self.figure_count += 1;
            let n = self.figure_count;
            write!(self.body, r#"<figure id="figure-{n}">"#).unwrap();
            write!(
                self.body,
                r#"<img src="{}" alt="{}"{close}"#,
                escape_html(src),
                escape_html(alt)
            )
            .unwrap();
            writeln!(
                self.body,
                "<figcaption>{} {n}: {}</figcaption></figure>",
                escape_html(&self.labels.figure),
                escape_html(title)
            )
            .unwrap();
        } else if title.is_empty() {
            write!(
                self.body,
                r#"<img src="{}" alt="{}"{close}"#,
                escape_html(src),
                escape_html(alt)
            )
            .unwrap();
        } else {
            write!(
                self.body,
                r#"<img src="{}" alt="{}" title="{}"{close}"#,
                escape_html(src),
                escape_html(alt),
                escape_html(title)
            )
            .unwrap();
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            let extensions = self.flags.extensions;
            spans::write_text_html(
                &mut self.body,
                text,
                extensions.contains(Extensions::AUTOLINK),
                extensions.contains(Extensions::HIGHLIGHT),
                extensions.contains(Extensions::QUOTE),
                &mut self.quote_open,
            );
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.push_text(code);
            self.heading
                .push_html(&format!("<code>{}</code>", escape_html(code)));
        } else {
            write!(self.body, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn raw_html(&mut self, html: &str) {
        if self.flags.render.contains(RenderFlags::SKIP_HTML) {
            return;
        }
        if self.flags.render.contains(RenderFlags::ESCAPE) {
            let escaped = escape_html(html);
            self.push_inline(&escaped);
        } else {
            self.push_inline(html);
        }
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else if self.flags.render.contains(RenderFlags::HARD_WRAP) {
            self.line_break();
        } else {
            self.push_inline("\n");
        }
    }

    fn line_break(&mut self) {
        if self.flags.render.contains(RenderFlags::XHTML) {
            self.push_inline("<br/>\n");
        } else {
            self.push_inline("<br>\n");
        }
    }

    fn horizontal_rule(&mut self) {
        if self.flags.render.contains(RenderFlags::XHTML) {
            self.body.push_str("<hr/>\n");
        } else {
            self.body.push_str("<hr>\n");
        }
    }

    fn footnote_reference(&mut self, label: &str) {
        let n = self.footnotes.number(label);
        let reference =
            format!(r##"<sup class="footnote-ref"><a href="#fn-{n}">[{n}]</a></sup>"##);
        self.push_inline(&reference);
    }

    fn inline_math(&mut self, math: &str) {
        let rendered = format!(r"\({}\)", escape_html(math));
        self.push_inline(&rendered);
    }

    fn display_math(&mut self, math: &str) {
        let rendered = format!("$${}$$", escape_html(math));
        self.push_inline(&rendered);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulldown_cmark::Parser;

    use mdr_flags::{FlagSet, resolve};

    use super::*;
    use crate::document::parser_options;

    fn render_with(markdown: &str, flags: FlagSet, toc_level: u8) -> String {
        let mut renderer = HtmlRenderer::new(flags, toc_level, Localization::default());
        let parser = Parser::new_ext(markdown, parser_options(flags.extensions));
        let mut out = String::new();
        renderer.render(parser, &Injection::default(), &mut out);
        out
    }

    fn render_html(markdown: &str) -> String {
        render_with(markdown, FlagSet::default(), 0)
    }

    fn flags_with(tokens: &[&str]) -> FlagSet {
        resolve(FlagSet::default(), tokens).unwrap()
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render_html("Hello, world!"), "<p>Hello, world!</p>\n");
    }

    #[test]
    fn test_heading_gets_anchor() {
        assert_eq!(
            render_html("## Section Title"),
            "<h2 id=\"section-title\">Section Title</h2>\n"
        );
    }

    #[test]
    fn test_anchor_limited_to_toc_level() {
        let html = render_with("# Top\n\n## Deep", FlagSet::default(), 1);
        assert!(html.contains(r#"<h1 id="top">Top</h1>"#));
        assert!(html.contains("<h2>Deep</h2>"));
    }

    #[test]
    fn test_duplicate_heading_anchors() {
        let html = render_html("## FAQ\n\n## FAQ");
        assert!(html.contains(r#"<h2 id="faq">"#));
        assert!(html.contains(r#"<h2 id="faq-1">"#));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let html = render_html("## Install `mdr`");
        assert!(html.contains("<code>mdr</code>"));
        assert!(html.contains(r#"id="install-mdr""#));
    }

    #[test]
    fn test_emphasis_and_strong() {
        let html = render_with("*italic* and **bold**", flags_with(&["no-underline"]), 0);
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_underline_replaces_emphasis_by_default() {
        let html = render_html("_marked_");
        assert!(html.contains("<u>marked</u>"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_strikethrough() {
        let html = render_html("~~deleted~~");
        assert!(html.contains("<del>deleted</del>"));
    }

    #[test]
    fn test_superscript() {
        let html = render_html("raised ^2^ here");
        assert!(html.contains("raised <sup>2</sup> here"));
    }

    #[test]
    fn test_highlight_span() {
        let html = render_html("this ==matters== a lot");
        assert!(html.contains("<mark>matters</mark>"));
    }

    #[test]
    fn test_quotes_become_q_elements() {
        let html = render_html("She said \"hello\" twice.");
        assert!(html.contains("<q>hello</q>"));
    }

    #[test]
    fn test_autolink_in_text() {
        let html = render_html("Visit https://example.com today.");
        assert!(html.contains(r#"<a href="https://example.com">https://example.com</a>"#));
    }

    #[test]
    fn test_inline_math() {
        let html = render_html("Euler: $e^{i\\pi}=-1$");
        assert!(html.contains(r"\(e^{i\pi}=-1\)"));
    }

    #[test]
    fn test_display_math() {
        let html = render_html("$$x^2$$");
        assert!(html.contains("$$x^2$$"));
    }

    #[test]
    fn test_code_block_with_language() {
        let html = render_html("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<pre><code class="language-rust">"#));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_code_block_escapes_content() {
        let html = render_html("```\na < b\n```");
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn test_mermaid_block_becomes_div() {
        let html = render_html("```mermaid\ngraph TD\n```");
        assert!(html.contains(r#"<div class="mermaid">graph TD"#));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn test_mermaid_block_stays_code_when_disabled() {
        let html = render_with("```mermaid\ngraph TD\n```", flags_with(&["no-mermaid"]), 0);
        assert!(html.contains(r#"<pre><code class="language-mermaid">"#));
    }

    #[test]
    fn test_captioned_listing() {
        let html = render_html("```c caption=Bubble-sort\nint x;\n```");
        assert!(html.contains(r#"<figure class="listing" id="listing-1">"#));
        assert!(html.contains(r#"<pre><code class="language-c">"#));
        assert!(html.contains("<figcaption>Listing 1: Bubble-sort</figcaption>"));
    }

    #[test]
    fn test_caption_ignored_without_numbering() {
        let html = render_with("```c caption=Sort\nint x;\n```", flags_with(&["no-sci"]), 0);
        assert!(!html.contains("<figure"));
        assert!(html.contains(r#"<pre><code class="language-c">"#));
    }

    #[test]
    fn test_titled_image_becomes_figure() {
        let html = render_html("![alt](chart.png \"Sales by year\")");
        assert!(html.contains(r#"<figure id="figure-1">"#));
        assert!(html.contains(r#"<img src="chart.png" alt="alt">"#));
        assert!(html.contains("<figcaption>Figure 1: Sales by year</figcaption>"));
    }

    #[test]
    fn test_figures_numbered_in_order() {
        let html = render_html("![a](a.png \"First\")\n\n![b](b.png \"Second\")");
        assert!(html.contains(r#"id="figure-1""#));
        assert!(html.contains(r#"id="figure-2""#));
        assert!(html.contains("Figure 2: Second"));
    }

    #[test]
    fn test_plain_image() {
        let html = render_html("![Alt text](image.png)");
        assert!(html.contains(r#"<img src="image.png" alt="Alt text">"#));
        assert!(!html.contains("<figure"));
    }

    #[test]
    fn test_xhtml_closes_void_elements() {
        let flags = flags_with(&["xhtml", "no-sci"]);
        let html = render_with("![a](i.png)\n\n---", flags, 0);
        assert!(html.contains(r#"<img src="i.png" alt="a"/>"#));
        assert!(html.contains("<hr/>"));
    }

    #[test]
    fn test_table_alignment() {
        let html = render_html("| A | B |\n|:--|--:|\n| 1 | 2 |");
        assert!(html.contains(r#"<th style="text-align:left">A</th>"#));
        assert!(html.contains(r#"<th style="text-align:right">B</th>"#));
        assert!(html.contains(r#"<td style="text-align:left">1</td>"#));
    }

    #[test]
    fn test_footnotes() {
        let html = render_html("Claim[^1].\n\n[^1]: Evidence.");
        assert!(html.contains(r##"<sup class="footnote-ref"><a href="#fn-1">[1]</a></sup>"##));
        assert!(html.contains(r#"<div class="footnote" id="fn-1"><sup>1</sup> "#));
        assert!(html.contains("Evidence."));
    }

    #[test]
    fn test_skip_html_drops_tags() {
        let html = render_with("before <b>bold</b> after", flags_with(&["skip-html"]), 0);
        assert!(!html.contains("<b>"));
        assert!(html.contains("bold"));
    }

    #[test]
    fn test_escape_html_flag() {
        let html = render_with("a <b>x</b> b", flags_with(&["escape"]), 0);
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_raw_html_passes_through_by_default() {
        let html = render_html("a <b>x</b> b");
        assert!(html.contains("<b>x</b>"));
    }

    #[test]
    fn test_hard_wrap() {
        let html = render_with("one\ntwo", flags_with(&["hard-wrap"]), 0);
        assert!(html.contains("one<br>\ntwo"));
    }

    #[test]
    fn test_soft_break_stays_newline_by_default() {
        assert_eq!(render_html("one\ntwo"), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_ordered_list_with_start() {
        let html = render_html("3. a\n4. b");
        assert!(html.contains(r#"<ol start="3">"#));
        assert!(html.contains("<li>a</li>"));
    }

    #[test]
    fn test_link_href_escaped() {
        let html = render_html("[x](http://a/?b=1&c=2)");
        assert!(html.contains(r#"<a href="http://a/?b=1&amp;c=2">x</a>"#));
    }

    #[test]
    fn test_injection_wraps_document() {
        let injection = Injection {
            header: Some("<script src=\"k.js\"></script>\n".to_string()),
            footer: Some("<script>go();</script>\n".to_string()),
        };
        let mut renderer = HtmlRenderer::new(FlagSet::default(), 0, Localization::default());
        let parser = Parser::new_ext("# Report\n\nBody.", parser_options(FlagSet::default().extensions));
        let mut out = String::new();
        renderer.render(parser, &injection, &mut out);

        assert!(out.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(out.contains("<title>Report</title>"));
        let head_end = out.find("</head>").unwrap();
        assert!(out[..head_end].contains("k.js"));
        let body_end = out.find("</body>").unwrap();
        assert!(out[..body_end].contains("go();"));
        assert!(out.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_injection_default_title() {
        let injection = Injection {
            header: Some(String::new()),
            footer: None,
        };
        let mut renderer = HtmlRenderer::new(FlagSet::default(), 0, Localization::default());
        let parser = Parser::new_ext("no heading here", parser_options(FlagSet::default().extensions));
        let mut out = String::new();
        renderer.render(parser, &injection, &mut out);
        assert!(out.contains("<title>Document</title>"));
    }

    #[test]
    fn test_unclosed_quote_is_closed() {
        let html = render_html("She said \"and never stopped");
        assert!(html.ends_with("</q></p>\n"));
    }
}
