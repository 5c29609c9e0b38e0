//! Command-line surface and configuration merging.
//!
//! The flag options are registered from the flag registry, so the help
//! output and the resolver always agree on the accepted tokens. Every
//! registered option also has a hidden `no-` twin; occurrence indices
//! rebuild the left-to-right token order the resolver folds over.

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use mdr_config::Config;
use mdr_flags::{
    CATEGORIES, CATEGORY_PREFIX, EXTENSIONS, NEGATION_PREFIX, RENDER_FLAGS, RenderFlags,
    extensions_in, resolve,
};
use mdr_pipeline::{ConvertConfig, DEF_INPUT_UNIT, DEF_MAX_NESTING, DEF_OUTPUT_UNIT};
use mdr_render::RendererKind;

use crate::error::CliError;

const ABOUT: &str = "Process the Markdown in FILE (or standard input) and render it to standard \
                     output. Parsing and rendering can be customized through the options below. \
                     The default is to parse pure markdown and output HTML.";

const EPILOG: &str = "Flags and extensions can be negated by prepending 'no' to them, as in \
                      '--no-tables', '--no-all-span' or '--no-escape'. Options are processed in \
                      order, so in case of contradictory options the last specified stands.\n\n\
                      When FILE is '-', read standard input. If no FILE was given, read standard \
                      input. Use '--' to signal end of option parsing. Exit status is 0 if no \
                      errors occurred, 1 with option parsing errors, 4 with memory allocation \
                      errors or 5 with I/O errors.";

/// A repeatable long flag whose id doubles as a resolver token.
fn flag_arg(name: impl Into<String>) -> Arg {
    let name = name.into();
    Arg::new(name.clone()).long(name).action(ArgAction::Count)
}

/// Build the command-line definition.
#[allow(clippy::too_many_lines)]
pub(crate) fn command() -> Command {
    let mut command = Command::new("mdr")
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .after_help(EPILOG)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Input file. When FILE is '-' or absent, read standard input."),
        )
        .next_help_heading("Main options")
        .arg(
            Arg::new("max-nesting")
                .short('n')
                .long("max-nesting")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help(format!(
                    "Maximum level of block nesting parsed. Default is {DEF_MAX_NESTING}."
                )),
        )
        .arg(
            Arg::new("toc-level")
                .short('t')
                .long("toc-level")
                .value_name("N")
                .value_parser(value_parser!(u8))
                .help(
                    "Maximum level for headers included in the TOC. Zero disables TOC (the \
                     default).",
                ),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .action(ArgAction::Count)
                .help("Render (X)HTML. The default."),
        )
        .arg(
            Arg::new("latex")
                .long("latex")
                .action(ArgAction::Count)
                .help("Render LaTeX."),
        )
        .arg(
            Arg::new("html-toc")
                .long("html-toc")
                .action(ArgAction::Count)
                .help("Render the Table of Contents in (X)HTML."),
        )
        .arg(
            Arg::new("time")
                .short('T')
                .long("time")
                .action(ArgAction::Count)
                .help("Show time spent in rendering."),
        )
        .arg(
            Arg::new("input-unit")
                .short('i')
                .long("input-unit")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help(format!("Reading block size. Default is {DEF_INPUT_UNIT}.")),
        )
        .arg(
            Arg::new("output-unit")
                .short('o')
                .long("output-unit")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help(format!("Writing block size. Default is {DEF_OUTPUT_UNIT}.")),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to configuration file (default: auto-discover mdr.toml)."),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Print this help text."),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version."),
        );

    for category in &CATEGORIES {
        command = command
            .next_help_heading(format!(
                "{} (--{}{})",
                category.label, CATEGORY_PREFIX, category.option_name
            ))
            .arg(flag_arg(format!("{CATEGORY_PREFIX}{}", category.option_name)).hide(true))
            .arg(
                flag_arg(format!(
                    "{NEGATION_PREFIX}{CATEGORY_PREFIX}{}",
                    category.option_name
                ))
                .hide(true),
            );
        for extension in extensions_in(category) {
            command = command
                .arg(flag_arg(extension.option_name).help(extension.description))
                .arg(flag_arg(format!("{NEGATION_PREFIX}{}", extension.option_name)).hide(true));
        }
    }

    command = command.next_help_heading("HTML-specific options");
    for info in &RENDER_FLAGS {
        let arg = if info.flag == RenderFlags::CSS {
            Arg::new(info.option_name)
                .long(info.option_name)
                .value_name("PATH")
                .action(ArgAction::Append)
                .help(info.description)
        } else {
            flag_arg(info.option_name).help(info.description)
        };
        command = command
            .arg(arg)
            .arg(flag_arg(format!("{NEGATION_PREFIX}{}", info.option_name)).hide(true));
    }

    command
}

/// Every argument id that doubles as a resolver token, in registry order.
fn token_ids() -> Vec<String> {
    let mut ids = Vec::new();
    for category in &CATEGORIES {
        ids.push(format!("{CATEGORY_PREFIX}{}", category.option_name));
        ids.push(format!(
            "{NEGATION_PREFIX}{CATEGORY_PREFIX}{}",
            category.option_name
        ));
    }
    for extension in &EXTENSIONS {
        ids.push(extension.option_name.to_owned());
        ids.push(format!("{NEGATION_PREFIX}{}", extension.option_name));
    }
    for info in &RENDER_FLAGS {
        ids.push(info.option_name.to_owned());
        ids.push(format!("{NEGATION_PREFIX}{}", info.option_name));
    }
    ids
}

/// Parsed command-line options.
#[derive(Debug)]
pub(crate) struct Options {
    pub(crate) config_path: Option<PathBuf>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) kind: Option<RendererKind>,
    pub(crate) toc_level: Option<u8>,
    pub(crate) max_nesting: Option<usize>,
    pub(crate) input_unit: Option<usize>,
    pub(crate) output_unit: Option<usize>,
    pub(crate) show_timing: bool,
    pub(crate) stylesheet: Option<String>,
    /// Flag tokens in command-line order.
    pub(crate) tokens: Vec<String>,
}

impl Options {
    /// Extract options from parsed matches.
    pub(crate) fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config_path: matches.get_one::<PathBuf>("config").cloned(),
            file: matches.get_one::<PathBuf>("FILE").cloned(),
            kind: renderer_kind(matches),
            toc_level: matches.get_one::<u8>("toc-level").copied(),
            max_nesting: matches.get_one::<usize>("max-nesting").copied(),
            input_unit: matches.get_one::<usize>("input-unit").copied(),
            output_unit: matches.get_one::<usize>("output-unit").copied(),
            show_timing: matches.get_count("time") > 0,
            stylesheet: matches
                .get_many::<String>("style")
                .and_then(|values| values.last().cloned()),
            tokens: ordered_tokens(matches),
        }
    }
}

/// True when `id` was actually given on the command line.
///
/// `Count` arguments carry a default of zero, and clap reports indices for
/// defaults too, so the occurrence scans below must not look at them.
fn given(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// The renderer selected last on the command line, if any.
fn renderer_kind(matches: &ArgMatches) -> Option<RendererKind> {
    let kinds = [
        ("html", RendererKind::Html),
        ("html-toc", RendererKind::HtmlToc),
        ("latex", RendererKind::Latex),
    ];
    let mut selected = None;
    let mut selected_index = 0;
    for (id, kind) in kinds {
        if given(matches, id)
            && let Some(indices) = matches.indices_of(id)
            && let Some(last) = indices.last()
            && (selected.is_none() || last > selected_index)
        {
            selected = Some(kind);
            selected_index = last;
        }
    }
    selected
}

/// Rebuild the left-to-right token order from occurrence indices.
fn ordered_tokens(matches: &ArgMatches) -> Vec<String> {
    let mut indexed: Vec<(usize, String)> = Vec::new();
    for id in token_ids() {
        if !given(matches, id.as_str()) {
            continue;
        }
        if let Some(indices) = matches.indices_of(id.as_str()) {
            for index in indices {
                indexed.push((index, id.clone()));
            }
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, token)| token).collect()
}

/// Merge the built-in defaults, the configuration file and the command
/// line, in that order, into a conversion configuration.
pub(crate) fn build_convert_config(
    options: &Options,
    file: &Config,
) -> Result<ConvertConfig, CliError> {
    let mut config = ConvertConfig::default();

    if let Some(name) = &file.defaults.renderer
        && let Some(kind) = RendererKind::from_name(name)
    {
        config.kind = kind;
    }
    if let Some(toc_level) = file.defaults.toc_level {
        config.toc_level = toc_level;
    }
    if let Some(max_nesting) = file.defaults.max_nesting {
        config.max_nesting = max_nesting;
    }
    if let Some(input_unit) = file.defaults.input_unit {
        config.input_unit = input_unit;
    }
    if let Some(output_unit) = file.defaults.output_unit {
        config.output_unit = output_unit;
    }
    if let Some(stylesheet) = &file.defaults.stylesheet {
        config.stylesheet = Some(stylesheet.clone());
    }
    if let Some(figure) = &file.labels.figure {
        config.labels.figure = figure.clone();
    }
    if let Some(listing) = &file.labels.listing {
        config.labels.listing = listing.clone();
    }
    if let Some(table) = &file.labels.table {
        config.labels.table = table.clone();
    }
    let flags = resolve(config.flags(), file.flag_tokens())?;
    let flags = resolve(flags, &options.tokens)?;
    config.set_flags(flags);

    if let Some(kind) = options.kind {
        config.kind = kind;
    }
    if let Some(toc_level) = options.toc_level {
        config.toc_level = toc_level;
    }
    if let Some(max_nesting) = options.max_nesting {
        config.max_nesting = max_nesting;
    }
    if let Some(input_unit) = options.input_unit {
        config.input_unit = input_unit;
    }
    if let Some(output_unit) = options.output_unit {
        config.output_unit = output_unit;
    }
    if options.show_timing {
        config.show_timing = true;
    }
    if let Some(stylesheet) = &options.stylesheet {
        config.stylesheet = Some(stylesheet.clone());
    }

    Ok(config)
}
