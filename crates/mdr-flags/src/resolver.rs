//! Ordered resolution of option tokens into a [`FlagSet`].
//!
//! Tokens are processed left to right and the last write to a bit wins.
//! Resolution is all-or-nothing: every token is parsed before any effect is
//! applied, so an unknown token never leaves a partially updated set behind.

use thiserror::Error;

use crate::registry::{
    CATEGORY_PREFIX, NEGATION_PREFIX, lookup_category, lookup_extension, lookup_render_flag,
};
use crate::{Extensions, RenderFlags};

/// Extension and render-flag selection produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSet {
    pub extensions: Extensions,
    pub render: RenderFlags,
}

impl FlagSet {
    /// Selection with every bit cleared.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            extensions: Extensions::empty(),
            render: RenderFlags::empty(),
        }
    }

    /// Apply a single effect, returning the updated set.
    #[must_use]
    pub fn apply(mut self, effect: FlagEffect) -> Self {
        match effect {
            FlagEffect::SetExtensions(flags) => self.extensions.insert(flags),
            FlagEffect::ClearExtensions(flags) => self.extensions.remove(flags),
            FlagEffect::SetRender(flags) => self.render.insert(flags),
            FlagEffect::ClearRender(flags) => self.render.remove(flags),
        }
        self
    }
}

impl Default for FlagSet {
    /// The stock selection: the block, span and other-flag categories, plus
    /// the diagram and stylesheet render flags.
    fn default() -> Self {
        Self {
            extensions: Extensions::BLOCK
                .union(Extensions::SPAN)
                .union(Extensions::OTHER),
            render: RenderFlags::MERMAID
                .union(RenderFlags::CHARTS)
                .union(RenderFlags::GNUPLOT)
                .union(RenderFlags::CSS),
        }
    }
}

/// The effect of one parsed option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    SetExtensions(Extensions),
    ClearExtensions(Extensions),
    SetRender(RenderFlags),
    ClearRender(RenderFlags),
}

/// A token that matches no extension, render flag or `all-` category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option token `{token}`")]
pub struct UnknownOptionError {
    pub token: String,
}

/// Parse one option token into its effect.
///
/// Grammar, tried in order after stripping an optional `no-` prefix:
/// `all-<category>` toggles a whole category, then extension names, then
/// render-flag names. A category name without the `all-` prefix is not a
/// token.
pub fn parse_token(token: &str) -> Result<FlagEffect, UnknownOptionError> {
    let (negated, name) = match token.strip_prefix(NEGATION_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if let Some(category_name) = name.strip_prefix(CATEGORY_PREFIX)
        && let Some(category) = lookup_category(category_name)
    {
        return Ok(if negated {
            FlagEffect::ClearExtensions(category.flags)
        } else {
            FlagEffect::SetExtensions(category.flags)
        });
    }

    if let Some(extension) = lookup_extension(name) {
        return Ok(if negated {
            FlagEffect::ClearExtensions(extension.flag)
        } else {
            FlagEffect::SetExtensions(extension.flag)
        });
    }

    if let Some(render_flag) = lookup_render_flag(name) {
        return Ok(if negated {
            FlagEffect::ClearRender(render_flag.flag)
        } else {
            FlagEffect::SetRender(render_flag.flag)
        });
    }

    Err(UnknownOptionError {
        token: token.to_owned(),
    })
}

/// Fold an ordered token sequence over `defaults`.
///
/// Returns the first unknown token as an error without applying anything.
pub fn resolve<I, S>(defaults: FlagSet, tokens: I) -> Result<FlagSet, UnknownOptionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let effects: Vec<FlagEffect> = tokens
        .into_iter()
        .map(|token| parse_token(token.as_ref()))
        .collect::<Result<_, _>>()?;
    Ok(effects.into_iter().fold(defaults, FlagSet::apply))
}
