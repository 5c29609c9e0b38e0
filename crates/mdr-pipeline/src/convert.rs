//! Single-call document conversion.

use std::collections::TryReserveError;
use std::time::{Duration, Instant};

use mdr_render::{EngineError, Renderer, render_document};

use crate::config::ConvertConfig;
use crate::injection::compose_injection;

/// The rendered document plus the optional timing measurement.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub output: Vec<u8>,
    /// Wall-clock render time, present only when timing was requested and
    /// the clock produced a usable reading.
    pub elapsed: Option<Duration>,
}

/// Errors surfaced by [`convert`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("output buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    #[error(transparent)]
    Render(#[from] EngineError),
}

/// Convert a Markdown document in one call.
///
/// Builds the renderer and injection fragments from `config`, renders
/// `input` and returns the finished bytes. The output buffer starts at
/// `config.output_unit` bytes and grows as needed.
///
/// # Errors
///
/// Returns [`ConvertError::Config`] for a rejected configuration,
/// [`ConvertError::Allocation`] when the output buffer cannot be reserved
/// and [`ConvertError::Render`] when the engine rejects the input.
pub fn convert(input: &[u8], config: &ConvertConfig) -> Result<Conversion, ConvertError> {
    config.validate()?;

    let mut renderer = Renderer::for_kind(
        config.kind,
        config.flags(),
        config.toc_level,
        &config.labels,
    );
    let injection = compose_injection(config.kind, config);

    let mut output = String::new();
    output.try_reserve(config.output_unit)?;

    tracing::debug!(
        kind = config.kind.name(),
        input_len = input.len(),
        "Rendering document"
    );
    let started = config.show_timing.then(Instant::now);
    render_document(
        &mut renderer,
        input,
        config.extensions,
        &injection,
        config.max_nesting,
        &mut output,
    )?;
    let elapsed = started.and_then(|instant| {
        let elapsed = Instant::now().checked_duration_since(instant);
        if elapsed.is_none() {
            tracing::warn!("Clock went backwards while timing the render");
        }
        elapsed
    });
    tracing::debug!(output_len = output.len(), "Render complete");

    Ok(Conversion {
        output: output.into_bytes(),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use mdr_render::RendererKind;

    use super::*;

    fn output_string(conversion: &Conversion) -> String {
        String::from_utf8(conversion.output.clone()).unwrap()
    }

    #[test]
    fn test_convert_html_document() {
        let conversion = convert(b"hello", &ConvertConfig::default()).unwrap();
        let output = output_string(&conversion);
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<p>hello</p>"));
        assert!(output.contains("hljs.highlightAll();"));
        assert!(conversion.elapsed.is_none());
    }

    #[test]
    fn test_convert_reports_elapsed_when_requested() {
        let config = ConvertConfig {
            show_timing: true,
            ..ConvertConfig::default()
        };
        let conversion = convert(b"hello", &config).unwrap();
        assert!(conversion.elapsed.is_some());
    }

    #[test]
    fn test_convert_latex() {
        let config = ConvertConfig {
            kind: RendererKind::Latex,
            ..ConvertConfig::default()
        };
        let conversion = convert(b"hello", &config).unwrap();
        let output = output_string(&conversion);
        assert!(output.starts_with("\\documentclass{article}"));
        assert!(output.contains("hello"));
    }

    #[test]
    fn test_convert_contents_list() {
        let config = ConvertConfig {
            kind: RendererKind::HtmlToc,
            toc_level: 2,
            ..ConvertConfig::default()
        };
        let conversion = convert(b"# One\n\n## Two\n", &config).unwrap();
        let output = output_string(&conversion);
        assert!(output.contains(r##"<a href="#one">One</a>"##));
        assert!(output.contains(r##"<a href="#two">Two</a>"##));
    }

    #[test]
    fn test_convert_rejects_bad_configuration() {
        let config = ConvertConfig {
            output_unit: 0,
            ..ConvertConfig::default()
        };
        let error = convert(b"hello", &config).unwrap_err();
        assert!(matches!(error, ConvertError::Config(_)));
    }

    #[test]
    fn test_convert_rejects_invalid_utf8() {
        let error = convert(b"\xff\xfe", &ConvertConfig::default()).unwrap_err();
        assert!(matches!(error, ConvertError::Render(_)));
    }

    #[test]
    fn test_config_reusable_across_conversions() {
        let config = ConvertConfig::default();
        let first = convert(b"first", &config).unwrap();
        let second = convert(b"second", &config).unwrap();
        assert!(output_string(&first).contains("<p>first</p>"));
        assert!(output_string(&second).contains("<p>second</p>"));
    }
}
