//! LaTeX renderer.

use std::collections::HashMap;
use std::fmt::Write;

use pulldown_cmark::{Alignment, CodeBlockKind, Event, Tag, TagEnd};

use mdr_flags::{Extensions, FlagSet};

use crate::document::Injection;
use crate::localization::Localization;
use crate::state::{CodeBlockState, FootnoteState, ImageState, heading_level, parse_fence_info};

/// Renders a markdown event stream to a complete LaTeX article.
///
/// The output is self-contained: a preamble with the packages the emitted
/// commands need, label names taken from [`Localization`], and an optional
/// `\tableofcontents` when `toc_level` is non-zero. Figures and listings are
/// numbered by LaTeX itself, so captions carry no explicit counters here.
pub struct LatexRenderer {
    flags: FlagSet,
    toc_level: u8,
    labels: Localization,
    body: String,
    code: CodeBlockState,
    image: ImageState,
    footnotes: FootnoteState,
    pending_image: Option<(String, String)>,
    quote_open: bool,
    table_cell: usize,
}

impl LatexRenderer {
    #[must_use]
    pub fn new(flags: FlagSet, toc_level: u8, labels: Localization) -> Self {
        Self {
            flags,
            toc_level,
            labels,
            body: String::with_capacity(4096),
            code: CodeBlockState::default(),
            image: ImageState::default(),
            footnotes: FootnoteState::default(),
            pending_image: None,
            quote_open: false,
            table_cell: 0,
        }
    }

    /// Render markdown events into `out`.
    ///
    /// Header and footer injection is an HTML concern; the LaTeX document
    /// shell is always emitted as-is.
    pub fn render<'a, I>(&mut self, events: I, _injection: &Injection, out: &mut String)
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        self.finish(out);
    }

    fn finish(&mut self, out: &mut String) {
        if self.quote_open {
            self.body.push_str("''");
            self.quote_open = false;
        }
        let body = std::mem::take(&mut self.body);

        out.push_str("\\documentclass{article}\n");
        out.push_str("\\usepackage[utf8]{inputenc}\n");
        out.push_str("\\usepackage{graphicx}\n");
        out.push_str("\\usepackage{amsmath}\n");
        out.push_str("\\usepackage{listings}\n");
        out.push_str("\\usepackage[normalem]{ulem}\n");
        out.push_str("\\usepackage{hyperref}\n");
        writeln!(
            out,
            "\\renewcommand{{\\figurename}}{{{}}}",
            escape_latex(&self.labels.figure)
        )
        .unwrap();
        writeln!(
            out,
            "\\renewcommand{{\\tablename}}{{{}}}",
            escape_latex(&self.labels.table)
        )
        .unwrap();
        writeln!(
            out,
            "\\renewcommand{{\\lstlistingname}}{{{}}}",
            escape_latex(&self.labels.listing)
        )
        .unwrap();
        if self.toc_level > 0 {
            writeln!(out, "\\setcounter{{tocdepth}}{{{}}}", self.toc_level).unwrap();
        }
        out.push_str("\\begin{document}\n");
        if self.toc_level > 0 {
            out.push_str("\\tableofcontents\n\n");
        }
        out.push_str(&body);
        out.push_str("\\end{document}\n");
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.body.push_str("\\\\\n"),
            Event::Rule => self.body.push_str("\n\\noindent\\hrulefill\n\n"),
            Event::FootnoteReference(label) => {
                let n = self.footnotes.number(&label);
                write!(self.body, "\\footnotemark[{n}]").unwrap();
            }
            Event::InlineMath(math) => {
                write!(self.body, "\\({math}\\)").unwrap();
            }
            Event::DisplayMath(math) => {
                write!(self.body, "\\[{math}\\]").unwrap();
            }
            // Raw HTML has no LaTeX counterpart.
            Event::Html(_) | Event::InlineHtml(_) => {}
            Event::TaskListMarker(_) => {}
        }
    }

    #[allow(clippy::too_many_lines)]
    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {}
            Tag::Heading { level, .. } => {
                write!(self.body, "{}{{", section_command(heading_level(level))).unwrap();
            }
            Tag::BlockQuote(_) => {
                self.body.push_str("\\begin{quote}\n");
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
                Some(1) => self.body.push_str("\\begin{enumerate}\n"),
                Some(n) => {
                    self.body.push_str("\\begin{enumerate}\n");
                    writeln!(self.body, "\\setcounter{{enumi}}{{{}}}", n - 1).unwrap();
                }
                None => self.body.push_str("\\begin{itemize}\n"),
            },
            Tag::Item => {
                self.body.push_str("\\item ");
            }
            Tag::FootnoteDefinition(label) => {
                let n = self.footnotes.number(&label);
                write!(self.body, "\\footnotetext[{n}]{{").unwrap();
            }
            Tag::Table(alignments) => {
                let columns: String = alignments
                    .iter()
                    .map(|alignment| match alignment {
                        Alignment::Center => 'c',
                        Alignment::Right => 'r',
                        Alignment::None | Alignment::Left => 'l',
                    })
                    .collect();
                writeln!(self.body, "\\begin{{tabular}}{{{columns}}}").unwrap();
                self.body.push_str("\\hline\n");
            }
            Tag::TableHead | Tag::TableRow => {
                self.table_cell = 0;
            }
            Tag::TableCell => {
                if self.table_cell > 0 {
                    self.body.push_str(" & ");
                }
                self.table_cell += 1;
            }
            Tag::Emphasis => {
                if self.flags.extensions.contains(Extensions::UNDERLINE) {
                    self.body.push_str("\\underline{");
                } else {
                    self.body.push_str("\\emph{");
                }
            }
            Tag::Strong => self.body.push_str("\\textbf{"),
            Tag::Strikethrough => self.body.push_str("\\sout{"),
            Tag::Link { dest_url, .. } => {
                write!(self.body, "\\href{{{}}}{{", escape_latex_url(&dest_url)).unwrap();
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::Superscript => self.body.push_str("\\textsuperscript{"),
            Tag::Subscript => self.body.push_str("\\textsubscript{"),
            Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList | Tag::DefinitionListTitle | Tag::DefinitionListDefinition => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.quote_open {
                    self.body.push_str("''");
                    self.quote_open = false;
                }
                self.body.push_str("\n\n");
            }
            TagEnd::Heading(_) => {
                self.body.push_str("}\n\n");
            }
            TagEnd::BlockQuote(_) => {
                self.body.push_str("\\end{quote}\n\n");
            }
            TagEnd::CodeBlock => {
                let (_language, attrs, content) = self.code.end();
                self.code_block(&attrs, &content);
            }
            TagEnd::List(ordered) => {
                self.body.push_str(if ordered {
                    "\\end{enumerate}\n\n"
                } else {
                    "\\end{itemize}\n\n"
                });
            }
            TagEnd::Item => {
                self.body.push('\n');
            }
            TagEnd::FootnoteDefinition => {
                self.body.push_str("}\n");
            }
            TagEnd::Table => {
                self.body.push_str("\\hline\n\\end{tabular}\n\n");
            }
            TagEnd::TableHead => {
                self.body.push_str(" \\\\\n\\hline\n");
            }
            TagEnd::TableRow => {
                self.body.push_str(" \\\\\n");
            }
            TagEnd::TableCell => {}
            TagEnd::Emphasis => self.body.push('}'),
            TagEnd::Strong | TagEnd::Strikethrough => self.body.push('}'),
            TagEnd::Link => self.body.push('}'),
            TagEnd::Image => {
                let _alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    self.write_image(&src, &title);
                }
            }
            TagEnd::Superscript | TagEnd::Subscript => self.body.push('}'),
            TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {}
        }
    }

    fn code_block(&mut self, attrs: &HashMap<String, String>, content: &str) {
        if self.flags.extensions.contains(Extensions::SCI)
            && let Some(caption) = attrs.get("caption")
        {
            writeln!(
                self.body,
                "\\begin{{lstlisting}}[caption={{{}}}]",
                escape_latex(caption)
            )
            .unwrap();
        } else {
            self.body.push_str("\\begin{lstlisting}\n");
        }
        self.body.push_str(content);
        if !content.ends_with('\n') {
            self.body.push('\n');
        }
        self.body.push_str("\\end{lstlisting}\n\n");
    }

    fn write_image(&mut self, src: &str, title: &str) {
        if self.flags.extensions.contains(Extensions::SCI) && !title.is_empty() {
            self.body.push_str("\\begin{figure}[h]\n\\centering\n");
            writeln!(self.body, "\\includegraphics[width=\\linewidth]{{{src}}}").unwrap();
            writeln!(self.body, "\\caption{{{}}}", escape_latex(title)).unwrap();
            self.body.push_str("\\end{figure}\n\n");
        } else {
            writeln!(self.body, "\\includegraphics[width=\\linewidth]{{{src}}}").unwrap();
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.flags.extensions.contains(Extensions::QUOTE) {
            for c in text.chars() {
                if c == '"' {
                    self.body
                        .push_str(if self.quote_open { "''" } else { "``" });
                    self.quote_open = !self.quote_open;
                } else {
                    escape_latex_char(&mut self.body, c);
                }
            }
        } else {
            escape_latex_into(&mut self.body, text);
        }
    }

    fn inline_code(&mut self, code: &str) {
        write!(self.body, "\\texttt{{{}}}", escape_latex(code)).unwrap();
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else {
            self.body.push('\n');
        }
    }
}

fn section_command(level: u8) -> &'static str {
    match level {
        1 => "\\section",
        2 => "\\subsection",
        3 => "\\subsubsection",
        4 => "\\paragraph",
        _ => "\\subparagraph",
    }
}

pub(crate) fn escape_latex_char(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\textbackslash{}"),
        '{' => out.push_str("\\{"),
        '}' => out.push_str("\\}"),
        '$' => out.push_str("\\$"),
        '&' => out.push_str("\\&"),
        '#' => out.push_str("\\#"),
        '_' => out.push_str("\\_"),
        '%' => out.push_str("\\%"),
        '~' => out.push_str("\\textasciitilde{}"),
        '^' => out.push_str("\\textasciicircum{}"),
        _ => out.push(c),
    }
}

pub(crate) fn escape_latex_into(out: &mut String, text: &str) {
    for c in text.chars() {
        escape_latex_char(out, c);
    }
}

/// Escape text for use in LaTeX body content.
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_latex_into(&mut out, text);
    out
}

/// Hyperref URL arguments only need `%` and `#` escaped.
fn escape_latex_url(url: &str) -> String {
    url.replace('%', "\\%").replace('#', "\\#")
}
