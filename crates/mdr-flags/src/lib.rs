//! Flag vocabulary for the mdr conversion pipeline.
//!
//! [`Extensions`] selects Markdown grammar extensions and [`RenderFlags`]
//! selects renderer behaviors. Both are plain bit sets. The [`registry`]
//! tables map each bit to its command-line option name and description, and
//! [`resolve`] folds an ordered sequence of option tokens over a starting
//! [`FlagSet`] with last-write-wins semantics.
//!
//! # Example
//!
//! ```
//! use mdr_flags::{resolve, Extensions, FlagSet, RenderFlags};
//!
//! let set = resolve(FlagSet::default(), ["no-all-span", "math", "escape"]).unwrap();
//! assert!(set.extensions.contains(Extensions::MATH));
//! assert!(!set.extensions.contains(Extensions::AUTOLINK));
//! assert!(set.render.contains(RenderFlags::ESCAPE));
//! ```

mod registry;
mod resolver;

pub use registry::{
    CATEGORIES, CATEGORY_PREFIX, CategoryInfo, EXTENSIONS, ExtensionInfo, NEGATION_PREFIX,
    RENDER_FLAGS, RenderFlagInfo, extensions_in, lookup_category, lookup_extension,
    lookup_render_flag,
};
pub use resolver::{FlagEffect, FlagSet, UnknownOptionError, parse_token, resolve};

use bitflags::bitflags;

bitflags! {
    /// Markdown grammar extensions.
    ///
    /// Bits are grouped into the four registry categories; the unions live
    /// in the associated constants below the atomic bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Extensions: u32 {
        /// PHP-Markdown style tables.
        const TABLES = 1 << 0;
        /// Fenced code blocks.
        const FENCED_CODE = 1 << 1;
        /// Footnotes.
        const FOOTNOTES = 1 << 2;

        /// Automatically turn safe URLs into links.
        const AUTOLINK = 1 << 3;
        /// Render "quotes" as `<q>quotes</q>`.
        const QUOTE = 1 << 4;
        /// `~~strikethrough~~` spans.
        const STRIKETHROUGH = 1 << 5;
        /// `_underline_` instead of emphasis.
        const UNDERLINE = 1 << 6;
        /// `==highlight==` spans.
        const HIGHLIGHT = 1 << 7;
        /// `^superscript^` spans.
        const SUPERSCRIPT = 1 << 8;
        /// TeX `$$math$$` syntax.
        const MATH = 1 << 9;

        /// Refuse emphasis inside words.
        const NO_INTRA_EMPHASIS = 1 << 10;
        /// Require a space after `#` in headers.
        const SPACE_HEADERS = 1 << 11;
        /// `$inline math$` and `$$block math$$` without context guessing.
        const MATH_EXPLICIT = 1 << 12;
        /// Scientific-document extensions (numbered figures and listings).
        const SCI = 1 << 13;

        /// Don't parse indented code blocks.
        const NO_INDENTED_CODE = 1 << 14;
    }
}

impl Extensions {
    /// Block-level category (`--all-block`).
    pub const BLOCK: Self = Self::TABLES.union(Self::FENCED_CODE).union(Self::FOOTNOTES);
    /// Span-level category (`--all-span`).
    pub const SPAN: Self = Self::AUTOLINK
        .union(Self::QUOTE)
        .union(Self::STRIKETHROUGH)
        .union(Self::UNDERLINE)
        .union(Self::HIGHLIGHT)
        .union(Self::SUPERSCRIPT)
        .union(Self::MATH);
    /// Other-flags category (`--all-flags`).
    pub const OTHER: Self = Self::NO_INTRA_EMPHASIS
        .union(Self::SPACE_HEADERS)
        .union(Self::MATH_EXPLICIT)
        .union(Self::SCI);
    /// Negative-flags category (`--all-negative`).
    pub const NEGATIVE: Self = Self::NO_INDENTED_CODE;
}

bitflags! {
    /// Renderer behavior flags.
    ///
    /// All bits are honored by the HTML renderer; the TOC and LaTeX
    /// renderers accept the set uniformly and ignore the HTML-only bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderFlags: u32 {
        /// Strip all raw HTML.
        const SKIP_HTML = 1 << 0;
        /// Escape all raw HTML instead of passing it through.
        const ESCAPE = 1 << 1;
        /// Render each soft linebreak as `<br>`.
        const HARD_WRAP = 1 << 2;
        /// Self-close void elements, XHTML style.
        const XHTML = 1 << 3;
        /// Turn `mermaid` fenced blocks into diagram hooks.
        const MERMAID = 1 << 4;
        /// Turn `gnuplot` fenced blocks into plot hooks.
        const GNUPLOT = 1 << 5;
        /// Link the configured user stylesheet.
        const CSS = 1 << 6;
        /// Turn `chart` fenced blocks into chart hooks.
        ///
        /// Not selectable from the command line; reachable only through
        /// defaults and configuration.
        const CHARTS = 1 << 7;
    }
}
