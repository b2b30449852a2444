//! Command-line interface for masteryls
//! This binary renders the quiz blocks of course documents and scores selections against them.
//!
//! Usage:
//!   masteryls render `<path>` [--format `<format>`]                 - Replace quiz blocks with markup
//!   masteryls inspect `<path>` [--format `<format>`]                - JSON report of every quiz block
//!   masteryls score `<path>` --quiz `<id|n>` --select `<i,j,...>`   - Score a selection
//!   masteryls formats                                              - List the source formats
//!
//!   Every command accepts --config `<file>` and -v (repeatable). Logs go to stderr.

mod commands;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use masteryls_config::{Loader, MasterylsConfig, PROJECT_FILE};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    let path = || {
        Arg::new("path")
            .help("Path to the course document")
            .required(true)
            .index(1)
            .value_parser(value_parser!(PathBuf))
    };
    let format = || {
        Arg::new("format")
            .long("format")
            .short('f')
            .help("Source format (default: guessed from the file extension)")
    };

    Command::new("masteryls")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and scoring masteryls quiz blocks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("render")
                .about("Print the document with its quiz blocks replaced by interactive markup")
                .arg(path())
                .arg(format()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print a JSON report of every quiz block in the document")
                .arg(path())
                .arg(format()),
        )
        .subcommand(
            Command::new("score")
                .about("Score a selection against one quiz of the document")
                .arg(path())
                .arg(format())
                .arg(
                    Arg::new("quiz")
                        .long("quiz")
                        .short('q')
                        .required(true)
                        .help("Quiz id, rendered key, or 1-based position in the document"),
                )
                .arg(
                    Arg::new("select")
                        .long("select")
                        .short('s')
                        .help("Comma-separated option indices, starting at 0")
                        .value_delimiter(',')
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("formats").about("List the available source formats"))
}

fn run(matches: &ArgMatches) -> Result<()> {
    let Some((command, args)) = matches.subcommand() else {
        bail!("no command given");
    };
    let config = load_config(args.get_one::<PathBuf>("config"))?;
    init_logging(&config, args.get_count("verbose"));

    match command {
        "render" => {
            let (path, format) = document_args(args)?;
            print!("{}", commands::render(path, format, &config)?);
        }
        "inspect" => {
            let (path, format) = document_args(args)?;
            println!("{}", commands::inspect(path, format, &config)?);
        }
        "score" => {
            let (path, format) = document_args(args)?;
            let quiz = args
                .get_one::<String>("quiz")
                .context("--quiz is required")?;
            let selected: Vec<usize> = args
                .get_many::<usize>("select")
                .map(|values| values.copied().collect())
                .unwrap_or_default();
            println!("{}", commands::score(path, format, quiz, &selected, &config)?);
        }
        "formats" => print!("{}", commands::formats()),
        other => bail!("unknown command '{other}'"),
    }
    Ok(())
}

/// The document path and the optional explicit format of a document command.
fn document_args(args: &ArgMatches) -> Result<(&PathBuf, Option<&str>)> {
    let path = args
        .get_one::<PathBuf>("path")
        .context("a document path is required")?;
    let format = args.get_one::<String>("format").map(String::as_str);
    Ok((path, format))
}

/// Defaults, then `masteryls.toml` in the working directory, then `--config`.
fn load_config(explicit: Option<&PathBuf>) -> Result<MasterylsConfig> {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    loader.build().context("failed to load configuration")
}

fn init_logging(config: &MasterylsConfig, verbosity: u8) {
    let level = match verbosity {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
