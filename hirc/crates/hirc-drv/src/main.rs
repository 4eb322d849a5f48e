//! hirc CLI - command-line front end for the HIR lexer.
//!
//! Parses arguments with clap, initializes logging, loads `hirc.toml`, and
//! dispatches to the command handlers in [`hirc_drv::commands`].

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hirc_drv::commands::{run_check, run_lex, CheckArgs, LexArgs};
use hirc_drv::{Config, DriverError, OutputFormat};

/// hirc - Lexical analysis for HIR source files
#[derive(Parser, Debug)]
#[command(name = "hirc")]
#[command(author = "HIR Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analysis for HIR source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "HIRC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HIRC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "HIRC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the hirc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    Lex(LexCommand),

    /// Report every illegal token and fail if there are any
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to scan (`-` reads stdin)
    #[arg(required = true)]
    files: Vec<String>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write tokens to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to scan (`-` reads stdin)
    #[arg(required = true)]
    files: Vec<String>,

    /// Diagnostics shown per file (default: from config)
    #[arg(long)]
    max_errors: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<DriverError>() {
                // Diagnostics are already on stderr.
                Some(DriverError::IllegalTokens { count }) => {
                    eprintln!("error: aborting due to {count} illegal token(s)");
                },
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let verbose = cli.verbose || config.verbose;
    let color = config.output.color && !cli.no_color;
    init_logging(verbose, color)?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, color: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> hirc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, letting flags override `config`.
fn execute_command(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Lex(args) => {
            let lex_args = LexArgs {
                inputs: args.files,
                format: args.format.unwrap_or(config.output.format),
                output: args.output,
            };
            run_lex(&lex_args)?;
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                inputs: args.files,
                max_errors: args.max_errors.unwrap_or(config.diagnostics.max_errors),
            };
            run_check(&check_args, &mut io::stderr().lock())?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["hirc", "lex", "main.hir"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files, vec!["main.hir".to_string()]);
            assert_eq!(args.format, None);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_format_and_output() {
        let cli = Cli::parse_from(["hirc", "lex", "a.hir", "b.hir", "-f", "json", "-o", "out.json"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["hirc", "lex", "a.hir", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_lex_requires_files() {
        assert!(Cli::try_parse_from(["hirc", "lex"]).is_err());
    }

    #[test]
    fn test_cli_parse_check_with_max_errors() {
        let cli = Cli::parse_from(["hirc", "check", "-", "--max-errors", "3"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, vec!["-".to_string()]);
            assert_eq!(args.max_errors, Some(3));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "hirc",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/hirc.toml",
            "check",
            "a.hir",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/hirc.toml")));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["hirc", "lex", "a.hir", "-v"]);
        assert!(cli.verbose);
    }
}
