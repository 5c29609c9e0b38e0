//! Renderer selection and dispatch.

use pulldown_cmark::Event;

use mdr_flags::FlagSet;

use crate::document::Injection;
use crate::html::HtmlRenderer;
use crate::latex::LatexRenderer;
use crate::localization::Localization;
use crate::toc::HtmlTocRenderer;

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RendererKind {
    #[default]
    Html,
    HtmlToc,
    Latex,
}

impl RendererKind {
    /// Look up a kind by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(Self::Html),
            "html-toc" => Some(Self::HtmlToc),
            "latex" => Some(Self::Latex),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::HtmlToc => "html-toc",
            Self::Latex => "latex",
        }
    }
}

/// A configured renderer for one conversion.
///
/// Every backend consumes the event stream the same way, so callers hold a
/// `Renderer` and never branch on the kind themselves.
pub enum Renderer {
    Html(HtmlRenderer),
    HtmlToc(HtmlTocRenderer),
    Latex(LatexRenderer),
}

impl Renderer {
    /// Build the renderer for `kind`.
    ///
    /// The table-of-contents renderer only consumes heading structure and
    /// ignores flags and labels.
    #[must_use]
    pub fn for_kind(
        kind: RendererKind,
        flags: FlagSet,
        toc_level: u8,
        labels: &Localization,
    ) -> Self {
        match kind {
            RendererKind::Html => Self::Html(HtmlRenderer::new(flags, toc_level, labels.clone())),
            RendererKind::HtmlToc => Self::HtmlToc(HtmlTocRenderer::new(toc_level)),
            RendererKind::Latex => {
                Self::Latex(LatexRenderer::new(flags, toc_level, labels.clone()))
            }
        }
    }

    /// The kind this renderer was built for.
    #[must_use]
    pub fn kind(&self) -> RendererKind {
        match self {
            Self::Html(_) => RendererKind::Html,
            Self::HtmlToc(_) => RendererKind::HtmlToc,
            Self::Latex(_) => RendererKind::Latex,
        }
    }

    /// Render markdown events into `out`.
    pub fn render<'a, I>(&mut self, events: I, injection: &Injection, out: &mut String)
    where
        I: Iterator<Item = Event<'a>>,
    {
        match self {
            Self::Html(renderer) => renderer.render(events, injection, out),
            Self::HtmlToc(renderer) => renderer.render(events, injection, out),
            Self::Latex(renderer) => renderer.render(events, injection, out),
        }
    }
}
