//! Configuration management for mdr.
//!
//! Parses `mdr.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! All fields are optional; absent values fall back to the built-in
//! defaults, and command-line arguments override everything loaded here.
//! The `extensions` and `render-flags` lists use the same option-token
//! grammar as the command line (`tables`, `no-all-span`, ...) and are
//! validated against the flag registry at load time.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use mdr_flags::{FlagSet, UnknownOptionError, resolve};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdr.toml";

/// Recognized `defaults.renderer` values.
pub const RENDERER_NAMES: [&str; 3] = ["html", "html-toc", "latex"];

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default conversion settings applied before command-line arguments.
    pub defaults: DefaultsConfig,
    /// Caption label overrides.
    pub labels: LabelsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// The `[defaults]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct DefaultsConfig {
    /// Output kind: `html`, `html-toc` or `latex`.
    pub renderer: Option<String>,
    /// Maximum heading level included in tables of contents.
    pub toc_level: Option<u8>,
    /// Maximum level of block nesting parsed.
    pub max_nesting: Option<usize>,
    /// Reading block size in bytes.
    pub input_unit: Option<usize>,
    /// Writing block size in bytes.
    pub output_unit: Option<usize>,
    /// Extension tokens folded over the built-in defaults.
    pub extensions: Vec<String>,
    /// Render-flag tokens folded after `extensions`.
    pub render_flags: Vec<String>,
    /// Stylesheet path linked when the `style` render flag is set.
    pub stylesheet: Option<String>,
}

/// The `[labels]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LabelsConfig {
    /// Caption label for numbered figures.
    pub figure: Option<String>,
    /// Caption label for numbered listings.
    pub listing: Option<String>,
    /// Caption label for tables.
    pub table: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Unknown token in `extensions` or `render-flags`.
    #[error("Configuration error: {0}")]
    UnknownOption(#[from] UnknownOptionError),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a numeric field to be positive.
fn require_positive(value: Option<usize>, field: &str) -> Result<(), ConfigError> {
    if value == Some(0) {
        return Err(ConfigError::Validation(format!("{field} must be greater than 0")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `mdr.toml` in the current directory and parents, and
    /// falls back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// reading, parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for out-of-range values and
    /// `ConfigError::UnknownOption` for unrecognized flag tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(renderer) = &self.defaults.renderer
            && !RENDERER_NAMES.contains(&renderer.as_str())
        {
            return Err(ConfigError::Validation(format!(
                "defaults.renderer must be one of html, html-toc, latex (got `{renderer}`)"
            )));
        }

        require_positive(self.defaults.max_nesting, "defaults.max-nesting")?;
        require_positive(self.defaults.input_unit, "defaults.input-unit")?;
        require_positive(self.defaults.output_unit, "defaults.output-unit")?;

        // Parse-check the token lists; the actual fold happens at merge time.
        resolve(FlagSet::default(), self.flag_tokens())?;

        if let Some(figure) = &self.labels.figure {
            require_non_empty(figure, "labels.figure")?;
        }
        if let Some(listing) = &self.labels.listing {
            require_non_empty(listing, "labels.listing")?;
        }
        if let Some(table) = &self.labels.table {
            require_non_empty(table, "labels.table")?;
        }

        Ok(())
    }

    /// All flag tokens from the file, in application order.
    pub fn flag_tokens(&self) -> impl Iterator<Item = &str> {
        self.defaults
            .extensions
            .iter()
            .chain(&self.defaults.render_flags)
            .map(String::as_str)
    }
}
