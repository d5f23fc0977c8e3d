//! Symdex CLI - resolve documentation cross-references from the command line.
//!
//! Loads an analyzer corpus, builds the symbol and module indexes, and answers
//! suffix queries against them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Symdex: suffix lookup for analyzer symbol paths.
#[derive(Parser)]
#[command(name = "symdex")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Analyzer output to index (JSON corpus)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Directory rooted references are resolved against (defaults to current directory)
    #[arg(short, long, global = true)]
    base_dir: Option<PathBuf>,

    /// Cache file for the loaded corpus; read if present, written otherwise
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a reference to a single symbol
    Resolve {
        /// Reference text (e.g., "`Widget#render`" or "./ui/widget.Widget")
        reference: String,

        /// Directory of the referring document (absolute, or relative to the base directory)
        #[arg(short, long, default_value = "")]
        from: String,
    },

    /// Resolve a reference to a module and list its contents
    Module {
        /// Module reference (e.g., "ui/widget")
        reference: String,

        /// Directory of the referring document (absolute, or relative to the base directory)
        #[arg(short, long, default_value = "")]
        from: String,
    },

    /// List every module grouped from the corpus
    Modules,

    /// Render path segments as a dotted name
    Dotted {
        /// Path segments, most general first (e.g., ./ dir/ file. Class# method)
        segments: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!(
                    "{}: failed to get current directory: {e}",
                    "error".red().bold()
                );
                return ExitCode::FAILURE;
            }
        },
    };
    let session = cli::Session {
        corpus: cli.corpus,
        cache: cli.cache,
        base_dir,
    };

    let result = match cli.command {
        Commands::Resolve { reference, from } => cli::resolve::run(&session, &reference, &from),
        Commands::Module { reference, from } => cli::module::run(&session, &reference, &from),
        Commands::Modules => cli::modules::run(&session),
        Commands::Dotted { segments } => {
            println!("{}", symdex::dotted_path(&segments));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
