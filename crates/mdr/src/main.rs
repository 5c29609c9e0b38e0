//! mdr CLI - Scientific Markdown conversion.
//!
//! Renders Markdown from FILE (or standard input) to standard output as
//! HTML, a table of contents or LaTeX. Parsing and rendering are driven
//! by the flag registry; see `--help` for the full option surface.

mod error;
mod input;
mod options;
mod output;

use std::io::Write;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mdr_config::Config;
use mdr_pipeline::convert;

use error::CliError;
use options::{Options, build_convert_config, command};
use output::Output;

fn main() -> ExitCode {
    let output = Output::new();

    // Logs go to stderr so the rendered document on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = match command().try_get_matches() {
        Ok(matches) => matches,
        Err(error) => {
            // clap routes help and version to stdout itself.
            let _ = error.print();
            let code = u8::from(error.use_stderr());
            return ExitCode::from(code);
        }
    };
    let options = Options::from_matches(&matches);

    match run(&options, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            output.error(&format!("Error: {error}"));
            ExitCode::from(error.exit_code())
        }
    }
}

/// Load configuration, read input, convert and write the result.
fn run(options: &Options, output: &Output) -> Result<(), CliError> {
    let file_config = Config::load(options.config_path.as_deref())?;
    let config = build_convert_config(options, &file_config)?;

    let input = input::read_input(options.file.as_deref(), config.input_unit)?;
    let conversion = convert(&input, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&conversion.output)?;
    stdout.flush()?;

    if config.show_timing {
        match conversion.elapsed {
            Some(elapsed) => output.timing(elapsed),
            None => output.warning("Failed to get the time."),
        }
    }

    Ok(())
}
