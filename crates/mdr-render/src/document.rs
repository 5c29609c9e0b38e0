//! Single-call document conversion entry point.

use std::str::Utf8Error;

use pulldown_cmark::{Options, Parser};
use thiserror::Error;

use mdr_flags::Extensions;

use crate::nesting::NestingLimiter;
use crate::renderer::Renderer;

/// HTML fragments spliced into the rendered document.
///
/// A non-empty injection makes the HTML renderer emit a full document shell
/// with the header inside `<head>` and the footer at the end of `<body>`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Injection {
    pub header: Option<String>,
    pub footer: Option<String>,
}

impl Injection {
    /// True when there is nothing to inject.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.footer.is_none()
    }
}

/// Rendering failure.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

/// Map grammar extensions to parser options.
///
/// Only the bits with a parser-level counterpart appear here; the span and
/// output extensions are applied by the renderers.
#[must_use]
pub fn parser_options(extensions: Extensions) -> Options {
    let mut options = Options::empty();
    if extensions.contains(Extensions::TABLES) {
        options |= Options::ENABLE_TABLES;
    }
    if extensions.contains(Extensions::FOOTNOTES) {
        options |= Options::ENABLE_FOOTNOTES;
    }
    if extensions.contains(Extensions::STRIKETHROUGH) {
        options |= Options::ENABLE_STRIKETHROUGH;
    }
    if extensions.contains(Extensions::SUPERSCRIPT) {
        options |= Options::ENABLE_SUPERSCRIPT;
    }
    if extensions.contains(Extensions::MATH) {
        options |= Options::ENABLE_MATH;
    }
    options
}

/// Render `input` through `renderer`, appending to `out`.
///
/// The input is validated as UTF-8 before anything is written, so `out` is
/// untouched on failure. Elements nested deeper than `max_nesting` are
/// dropped from the event stream before they reach the renderer.
pub fn render_document(
    renderer: &mut Renderer,
    input: &[u8],
    extensions: Extensions,
    injection: &Injection,
    max_nesting: usize,
    out: &mut String,
) -> Result<(), EngineError> {
    let text = std::str::from_utf8(input)?;
    let parser = Parser::new_ext(text, parser_options(extensions));
    let events = NestingLimiter::new(parser, max_nesting);
    renderer.render(events, injection, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use mdr_flags::FlagSet;

    use super::*;
    use crate::localization::Localization;
    use crate::renderer::RendererKind;

    fn html_renderer(flags: FlagSet) -> Renderer {
        Renderer::for_kind(RendererKind::Html, flags, 0, &Localization::default())
    }

    fn resolve_flags(tokens: &[&str]) -> FlagSet {
        mdr_flags::resolve(FlagSet::default(), tokens).unwrap()
    }

    fn render(input: &[u8], flags: FlagSet) -> Result<String, EngineError> {
        let mut renderer = html_renderer(flags);
        let mut out = String::new();
        render_document(
            &mut renderer,
            input,
            flags.extensions,
            &Injection::default(),
            16,
            &mut out,
        )?;
        Ok(out)
    }

    #[test]
    fn test_renders_valid_input() {
        let out = render(b"hello **world**", FlagSet::default()).unwrap();
        assert_eq!(out, "<p>hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_invalid_utf8_leaves_output_untouched() {
        let mut renderer = html_renderer(FlagSet::default());
        let mut out = String::from("existing");
        let result = render_document(
            &mut renderer,
            &[0xff, 0xfe, 0x01],
            FlagSet::default().extensions,
            &Injection::default(),
            16,
            &mut out,
        );
        assert!(matches!(result, Err(EngineError::InvalidUtf8(_))));
        assert_eq!(out, "existing");
    }

    #[test]
    fn test_nesting_limit_prunes_deep_elements() {
        let mut renderer = html_renderer(FlagSet::default());
        let mut out = String::new();
        // The inner quote's paragraph would open a third level.
        render_document(
            &mut renderer,
            b"> outer\n>> hidden",
            FlagSet::default().extensions,
            &Injection::default(),
            2,
            &mut out,
        )
        .unwrap();
        assert!(out.contains("outer"));
        assert!(!out.contains("hidden"));
    }

    #[test]
    fn test_math_requires_extension() {
        let without = resolve_flags(&["no-math"]);
        let out = render(b"value $x$ here", without).unwrap();
        assert!(out.contains("$x$"));

        let out = render(b"value $x$ here", FlagSet::default()).unwrap();
        assert!(out.contains(r"\(x\)"));
    }

    #[test]
    fn test_footnote_syntax_without_extension_reads_as_link_reference() {
        // With footnotes off, `[^1]: note` is a plain link-reference
        // definition to the CommonMark core, so the reference becomes a link.
        let without = resolve_flags(&["no-footnotes"]);
        let out = render(b"claim[^1]\n\n[^1]: note", without).unwrap();
        assert!(!out.contains("footnote-ref"));
        assert!(out.contains(r#"<a href="note">^1</a>"#));

        let out = render(b"claim[^1]\n\n[^1]: note", FlagSet::default()).unwrap();
        assert!(out.contains("footnote-ref"));
    }

    #[test]
    fn test_parser_options_mapping() {
        let options = parser_options(Extensions::TABLES | Extensions::MATH);
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_MATH));
        assert!(!options.contains(Options::ENABLE_FOOTNOTES));

        assert_eq!(parser_options(Extensions::empty()), Options::empty());
    }
}
