//! Option-name tables for extensions, categories and render flags.
//!
//! The tables drive both token resolution and command-line help. Option
//! names are case-sensitive and unique within their namespace.

use std::collections::HashMap;
use std::sync::LazyLock;

use static_assertions::const_assert_eq;

use crate::{Extensions, RenderFlags};

/// Prefix that addresses a whole extension category, as in `all-block`.
pub const CATEGORY_PREFIX: &str = "all-";

/// Prefix that clears instead of sets, as in `no-tables` or `no-all-span`.
pub const NEGATION_PREFIX: &str = "no-";

/// One selectable grammar extension.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionInfo {
    pub flag: Extensions,
    pub option_name: &'static str,
    pub description: &'static str,
}

/// One extension category, addressed with [`CATEGORY_PREFIX`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub flags: Extensions,
    pub option_name: &'static str,
    pub label: &'static str,
}

/// One renderer behavior flag.
#[derive(Debug, Clone, Copy)]
pub struct RenderFlagInfo {
    pub flag: RenderFlags,
    pub option_name: &'static str,
    pub description: &'static str,
}

pub static CATEGORIES: [CategoryInfo; 4] = [
    CategoryInfo {
        flags: Extensions::BLOCK,
        option_name: "block",
        label: "Block extensions",
    },
    CategoryInfo {
        flags: Extensions::SPAN,
        option_name: "span",
        label: "Span extensions",
    },
    CategoryInfo {
        flags: Extensions::OTHER,
        option_name: "flags",
        label: "Other flags",
    },
    CategoryInfo {
        flags: Extensions::NEGATIVE,
        option_name: "negative",
        label: "Negative flags",
    },
];

pub static EXTENSIONS: [ExtensionInfo; 15] = [
    ExtensionInfo {
        flag: Extensions::TABLES,
        option_name: "tables",
        description: "Parse PHP-Markdown style tables.",
    },
    ExtensionInfo {
        flag: Extensions::FENCED_CODE,
        option_name: "fenced-code",
        description: "Parse fenced code blocks.",
    },
    ExtensionInfo {
        flag: Extensions::FOOTNOTES,
        option_name: "footnotes",
        description: "Parse footnotes.",
    },
    ExtensionInfo {
        flag: Extensions::AUTOLINK,
        option_name: "autolink",
        description: "Automatically turn safe URLs into links.",
    },
    ExtensionInfo {
        flag: Extensions::STRIKETHROUGH,
        option_name: "strikethrough",
        description: "Parse ~~strikethrough~~ spans.",
    },
    ExtensionInfo {
        flag: Extensions::UNDERLINE,
        option_name: "underline",
        description: "Parse _underline_ instead of emphasis.",
    },
    ExtensionInfo {
        flag: Extensions::HIGHLIGHT,
        option_name: "highlight",
        description: "Parse ==highlight== spans.",
    },
    ExtensionInfo {
        flag: Extensions::QUOTE,
        option_name: "quote",
        description: "Render \"quotes\" as <q>quotes</q>.",
    },
    ExtensionInfo {
        flag: Extensions::SUPERSCRIPT,
        option_name: "superscript",
        description: "Parse ^superscript^ spans.",
    },
    ExtensionInfo {
        flag: Extensions::MATH,
        option_name: "math",
        description: "Parse TeX $$math$$ syntax, Kramdown style.",
    },
    ExtensionInfo {
        flag: Extensions::NO_INTRA_EMPHASIS,
        option_name: "disable-intra-emphasis",
        description: "Disable emphasis between words.",
    },
    ExtensionInfo {
        flag: Extensions::SPACE_HEADERS,
        option_name: "space-headers",
        description: "Require a space after '#' in headers.",
    },
    ExtensionInfo {
        flag: Extensions::MATH_EXPLICIT,
        option_name: "math-explicit",
        description: "Instead of guessing by context, parse $inline math$ and $$always block math$$ (requires --math).",
    },
    ExtensionInfo {
        flag: Extensions::SCI,
        option_name: "sci",
        description: "Number titled figures and captioned listings.",
    },
    ExtensionInfo {
        flag: Extensions::NO_INDENTED_CODE,
        option_name: "disable-indented-code",
        description: "Don't parse indented code blocks.",
    },
];

// CHARTS is deliberately absent: it has no command-line option.
pub static RENDER_FLAGS: [RenderFlagInfo; 7] = [
    RenderFlagInfo {
        flag: RenderFlags::SKIP_HTML,
        option_name: "skip-html",
        description: "Strip all HTML tags.",
    },
    RenderFlagInfo {
        flag: RenderFlags::ESCAPE,
        option_name: "escape",
        description: "Escape all HTML.",
    },
    RenderFlagInfo {
        flag: RenderFlags::HARD_WRAP,
        option_name: "hard-wrap",
        description: "Render each linebreak as <br>.",
    },
    RenderFlagInfo {
        flag: RenderFlags::XHTML,
        option_name: "xhtml",
        description: "Render XHTML.",
    },
    RenderFlagInfo {
        flag: RenderFlags::MERMAID,
        option_name: "mermaid",
        description: "Render mermaid diagrams.",
    },
    RenderFlagInfo {
        flag: RenderFlags::GNUPLOT,
        option_name: "gnuplot",
        description: "Render gnuplot plots.",
    },
    RenderFlagInfo {
        flag: RenderFlags::CSS,
        option_name: "style",
        description: "Link the given style-sheet.",
    },
];

// The categories partition the extension space: together they cover every
// defined bit, and no bit belongs to two categories.
const_assert_eq!(
    Extensions::BLOCK
        .union(Extensions::SPAN)
        .union(Extensions::OTHER)
        .union(Extensions::NEGATIVE)
        .bits(),
    Extensions::all().bits()
);
const_assert_eq!(Extensions::BLOCK.intersection(Extensions::SPAN).bits(), 0);
const_assert_eq!(Extensions::BLOCK.intersection(Extensions::OTHER).bits(), 0);
const_assert_eq!(Extensions::BLOCK.intersection(Extensions::NEGATIVE).bits(), 0);
const_assert_eq!(Extensions::SPAN.intersection(Extensions::OTHER).bits(), 0);
const_assert_eq!(Extensions::SPAN.intersection(Extensions::NEGATIVE).bits(), 0);
const_assert_eq!(Extensions::OTHER.intersection(Extensions::NEGATIVE).bits(), 0);

static EXTENSIONS_BY_NAME: LazyLock<HashMap<&'static str, ExtensionInfo>> = LazyLock::new(|| {
    EXTENSIONS
        .iter()
        .map(|info| (info.option_name, *info))
        .collect()
});

static CATEGORIES_BY_NAME: LazyLock<HashMap<&'static str, CategoryInfo>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .map(|info| (info.option_name, *info))
        .collect()
});

static RENDER_FLAGS_BY_NAME: LazyLock<HashMap<&'static str, RenderFlagInfo>> = LazyLock::new(|| {
    RENDER_FLAGS
        .iter()
        .map(|info| (info.option_name, *info))
        .collect()
});

/// Look up a grammar extension by its exact option name.
#[must_use]
pub fn lookup_extension(name: &str) -> Option<ExtensionInfo> {
    EXTENSIONS_BY_NAME.get(name).copied()
}

/// Look up a category by its bare name (without the `all-` prefix).
#[must_use]
pub fn lookup_category(name: &str) -> Option<CategoryInfo> {
    CATEGORIES_BY_NAME.get(name).copied()
}

/// Look up a render flag by its exact option name.
#[must_use]
pub fn lookup_render_flag(name: &str) -> Option<RenderFlagInfo> {
    RENDER_FLAGS_BY_NAME.get(name).copied()
}

/// Extensions belonging to `category`, in table order.
pub fn extensions_in(category: &CategoryInfo) -> impl Iterator<Item = &'static ExtensionInfo> {
    let flags = category.flags;
    EXTENSIONS.iter().filter(move |info| flags.contains(info.flag))
}
