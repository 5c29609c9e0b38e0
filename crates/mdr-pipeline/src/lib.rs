//! One-call Markdown conversion on top of the rendering engine.
//!
//! [`convert`] takes raw document bytes and a [`ConvertConfig`] and produces
//! the finished output for the configured renderer, composing the header and
//! footer fragments HTML documents need along the way.
//!
//! ```
//! use mdr_pipeline::{ConvertConfig, convert};
//!
//! let conversion = convert(b"# Title\n\nBody.", &ConvertConfig::default()).unwrap();
//! let html = String::from_utf8(conversion.output).unwrap();
//! assert!(html.contains("<p>Body.</p>"));
//! ```

mod config;
mod convert;
mod injection;

pub use config::{ConvertConfig, DEF_INPUT_UNIT, DEF_MAX_NESTING, DEF_OUTPUT_UNIT};
pub use convert::{Conversion, ConvertError, convert};
pub use injection::compose_injection;
