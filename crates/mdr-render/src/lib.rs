//! Markdown rendering engine with HTML, TOC and LaTeX output.
//!
//! This crate turns a markdown event stream into one of three output
//! documents, selected through [`RendererKind`]:
//! - [`HtmlRenderer`]: an HTML body, optionally wrapped in a full document
//!   shell when header or footer fragments are injected
//! - [`HtmlTocRenderer`]: a nested list of heading links and nothing else
//! - [`LatexRenderer`]: a self-contained LaTeX article
//!
//! Which grammar is parsed and how elements are rendered is controlled by
//! the flag words from `mdr-flags`; [`render_document`] ties parsing, depth
//! limiting and rendering together behind a single call.
//!
//! # Example
//!
//! ```
//! use mdr_flags::FlagSet;
//! use mdr_render::{Injection, Localization, Renderer, RendererKind, render_document};
//!
//! let flags = FlagSet::default();
//! let mut renderer =
//!     Renderer::for_kind(RendererKind::Html, flags, 0, &Localization::default());
//! let mut out = String::new();
//! render_document(
//!     &mut renderer,
//!     b"# Hello\n\n**Bold** text",
//!     flags.extensions,
//!     &Injection::default(),
//!     16,
//!     &mut out,
//! )
//! .unwrap();
//! assert!(out.contains("<strong>Bold</strong>"));
//! ```

mod document;
mod html;
mod latex;
mod localization;
mod nesting;
mod renderer;
mod spans;
mod state;
mod toc;

pub use document::{EngineError, Injection, parser_options, render_document};
pub use html::HtmlRenderer;
pub use latex::{LatexRenderer, escape_latex};
pub use localization::Localization;
pub use nesting::NestingLimiter;
pub use renderer::{Renderer, RendererKind};
pub use state::escape_html;
pub use toc::HtmlTocRenderer;
