//! Header and footer composition for rendered documents.

use std::fmt::Write;

use mdr_flags::{Extensions, RenderFlags};
use mdr_render::{Injection, RendererKind, escape_html};

use crate::config::ConvertConfig;

const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.js";
const KATEX_AUTO_RENDER_JS: &str =
    "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/contrib/auto-render.min.js";
const HIGHLIGHT_CSS: &str =
    "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@11.10.0/build/styles/default.min.css";
const HIGHLIGHT_JS: &str =
    "https://cdn.jsdelivr.net/gh/highlightjs/cdn-release@11.10.0/build/highlight.min.js";
const MERMAID_JS: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js";

/// Build the header and footer fragments for `kind`.
///
/// Only the HTML document renderer receives fragments; contents lists and
/// LaTeX output stay bare. The header loads the client-side libraries the
/// active flags call for and the footer activates them, so the two are
/// always composed as a pair.
#[must_use]
pub fn compose_injection(kind: RendererKind, config: &ConvertConfig) -> Injection {
    if kind != RendererKind::Html {
        return Injection::default();
    }

    let math = config.extensions.contains(Extensions::MATH);
    let mermaid = config.render.contains(RenderFlags::MERMAID);

    let mut header = String::new();
    if math {
        writeln!(
            header,
            r#"<link rel="stylesheet" href="{KATEX_CSS}" crossorigin="anonymous">"#
        )
        .unwrap();
        writeln!(
            header,
            r#"<script src="{KATEX_JS}" crossorigin="anonymous"></script>"#
        )
        .unwrap();
        writeln!(
            header,
            r#"<script src="{KATEX_AUTO_RENDER_JS}" crossorigin="anonymous"></script>"#
        )
        .unwrap();
    }
    writeln!(header, r#"<link rel="stylesheet" href="{HIGHLIGHT_CSS}">"#).unwrap();
    writeln!(header, r#"<script src="{HIGHLIGHT_JS}"></script>"#).unwrap();
    if mermaid {
        writeln!(header, r#"<script src="{MERMAID_JS}"></script>"#).unwrap();
    }
    if config.render.contains(RenderFlags::CSS)
        && let Some(stylesheet) = &config.stylesheet
        && !stylesheet.is_empty()
    {
        writeln!(
            header,
            r#"<link rel="stylesheet" href="{}">"#,
            escape_html(stylesheet)
        )
        .unwrap();
    }

    let mut footer = String::from("<script>");
    if math {
        footer.push_str("renderMathInElement(document.body);");
    }
    footer.push_str("hljs.highlightAll();");
    if mermaid {
        footer.push_str("mermaid.initialize({startOnLoad:true});");
    }
    footer.push_str("</script>\n");

    Injection {
        header: Some(header),
        footer: Some(footer),
    }
}
