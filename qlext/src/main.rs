//! Qlext CLI - A command-line tool for inspecting search queries.
//!
//! This is the main entry point for the qlext CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers, which run the query scanner over the given inputs.

mod commands;
mod config;
mod error;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{gather_queries, OutputFormat},
    CheckCommand, CheckSettings, Command, LexCommand, LexSettings,
};
use config::Config;
use error::{QlextError, Result};

/// Qlext - A CLI tool for search query scanning
///
/// Qlext splits search queries into terms, phrases, field separators
/// and whitespace, and flags phrases that are never closed.
#[derive(Parser, Debug)]
#[command(name = "qlext")]
#[command(author = "qlex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for search query scanning", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "QLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "QLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "QLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the qlext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each query
    ///
    /// Queries come from the arguments, from `--file`, or one per line
    /// from standard input when neither is given.
    Lex(LexArgs),

    /// Report phrases that are missing their closing quote
    ///
    /// Exits with an error when any is found, unless
    /// `--allow-unterminated` is set.
    Check(CheckArgs),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexArgs {
    /// Queries to scan
    queries: Vec<String>,

    /// Files holding one query per line
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Leave whitespace tokens out of the listing
    #[arg(long)]
    skip_whitespace: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckArgs {
    /// Queries to check
    queries: Vec<String>,

    /// Files holding one query per line
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Report unterminated phrases without failing
    #[arg(long)]
    allow_unterminated: bool,
}

/// Main entry point for the qlext CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its verbose flag can raise the log level
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| QlextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => {
            let inputs = gather_queries(&args.queries, &args.files, io::stdin().lock())?;
            let settings = LexSettings::resolve(
                &config.output,
                args.format,
                args.compact,
                args.skip_whitespace,
            );
            let summary = dispatch(LexCommand::new(inputs, settings))?;
            tracing::debug!(queries = summary.queries, tokens = summary.tokens, "lex finished");
        }
        Commands::Check(args) => {
            let inputs = gather_queries(&args.queries, &args.files, io::stdin().lock())?;
            let settings = CheckSettings::resolve(&config.check, args.allow_unterminated);
            dispatch(CheckCommand::new(inputs, settings))?;
        }
    }
    Ok(())
}

/// Run a command against a locked stdout.
fn dispatch<C: Command>(command: C) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "running command");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = command.execute(&mut out);
    out.flush()?;
    result
}
