//! Frozen per-conversion configuration.

use mdr_flags::{Extensions, FlagSet, RenderFlags};
use mdr_render::{Localization, RendererKind};

use crate::convert::ConvertError;

/// Default input buffer hint in bytes.
pub const DEF_INPUT_UNIT: usize = 1024;
/// Default output buffer hint in bytes.
pub const DEF_OUTPUT_UNIT: usize = 64;
/// Default maximum element nesting depth.
pub const DEF_MAX_NESTING: usize = 16;

/// Everything one conversion needs, resolved before [`convert`] runs.
///
/// Callers assemble this from defaults, a config file and command-line
/// options in whatever order suits them; `convert` never mutates it, so a
/// single instance can drive any number of conversions.
///
/// [`convert`]: crate::convert::convert
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub extensions: Extensions,
    pub render: RenderFlags,
    pub kind: RendererKind,
    /// Maximum heading level in generated contents; zero disables the TOC.
    pub toc_level: u8,
    pub max_nesting: usize,
    /// Sizing hint for readers feeding input into the pipeline.
    pub input_unit: usize,
    /// Initial output buffer reservation.
    pub output_unit: usize,
    pub show_timing: bool,
    pub stylesheet: Option<String>,
    pub labels: Localization,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let flags = FlagSet::default();
        Self {
            extensions: flags.extensions,
            render: flags.render,
            kind: RendererKind::default(),
            toc_level: 0,
            max_nesting: DEF_MAX_NESTING,
            input_unit: DEF_INPUT_UNIT,
            output_unit: DEF_OUTPUT_UNIT,
            show_timing: false,
            stylesheet: None,
            labels: Localization::default(),
        }
    }
}

impl ConvertConfig {
    /// Both flag words as one set.
    #[must_use]
    pub fn flags(&self) -> FlagSet {
        FlagSet {
            extensions: self.extensions,
            render: self.render,
        }
    }

    /// Replace both flag words from a resolved set.
    pub fn set_flags(&mut self, flags: FlagSet) {
        self.extensions = flags.extensions;
        self.render = flags.render;
    }

    /// Reject values that would make conversion impossible.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.input_unit == 0 {
            return Err(ConvertError::Config("input-unit must be positive".into()));
        }
        if self.output_unit == 0 {
            return Err(ConvertError::Config("output-unit must be positive".into()));
        }
        if self.max_nesting == 0 {
            return Err(ConvertError::Config("max-nesting must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = ConvertConfig::default();
        assert_eq!(config.input_unit, 1024);
        assert_eq!(config.output_unit, 64);
        assert_eq!(config.max_nesting, 16);
        assert_eq!(config.toc_level, 0);
        assert_eq!(config.kind, RendererKind::Html);
        assert!(!config.show_timing);
        assert_eq!(config.flags(), FlagSet::default());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ConvertConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_units() {
        let config = ConvertConfig {
            output_unit: 0,
            ..ConvertConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConvertError::Config(message)) if message.contains("output-unit")
        ));

        let config = ConvertConfig {
            input_unit: 0,
            ..ConvertConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ConvertConfig {
            max_nesting: 0,
            ..ConvertConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_flags_round_trips() {
        let mut config = ConvertConfig::default();
        let flags = mdr_flags::resolve(FlagSet::default(), ["no-all-span", "xhtml"]).unwrap();
        config.set_flags(flags);
        assert_eq!(config.flags(), flags);
    }
}
