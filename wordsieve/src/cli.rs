// wordsieve/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordsieve application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wordsieve_core::Query;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordsieve",
    author = "Obscura Tech",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find, filter and mask sensitive words in text",
    long_about = "wordsieve matches text against a vocabulary of sensitive words, including occurrences disguised with noise characters between their letters. It runs either as an HTTP service or as a one-shot command over a file or stdin.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to a YAML configuration file.
    #[arg(long, global = true, value_name = "FILE", env = "WORDSIEVE_CONFIG", help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// Dictionary file or http(s) URL, overriding the configuration.
    #[arg(long = "dict", global = true, value_name = "PATH|URL", env = "WORDSIEVE_DICT", help = "Dictionary file or http(s) URL (one word per line).")]
    pub dict: Option<String>,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordsieve` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the HTTP service.
    #[command(about = "Run the HTTP service.")]
    Serve(ServeCommand),

    /// Masks every matched word.
    #[command(about = "Mask sensitive words in the input.")]
    Replace(ReplaceCommand),

    /// Lists the distinct matched words.
    #[command(about = "List the distinct sensitive words found in the input.")]
    Filter(QueryArgs),

    /// Checks whether the input is clean; exits with 1 when it is not.
    #[command(about = "Check the input; exits with status 1 when a sensitive word is found.")]
    Validate(QueryArgs),

    /// Lists every matched word in order.
    #[command(about = "List every sensitive word occurrence in the input, in order.")]
    FindAll(QueryArgs),

    /// Prints the loaded vocabulary.
    #[command(about = "Print the loaded vocabulary, sorted.")]
    Words,
}

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Address to listen on.
    #[arg(long, value_name = "ADDR", env = "WORDSIEVE_BIND", help = "Address to listen on (default 0.0.0.0:80).")]
    pub bind: Option<String>,

    /// Write word edits back to the dictionary file.
    #[arg(long, help = "Write addWord/delWord edits back to the dictionary file.")]
    pub persist: bool,
}

/// Arguments shared by the one-shot query commands.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

/// Arguments for the `replace` command.
#[derive(Args, Debug)]
pub struct ReplaceCommand {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Mask character, overriding the configuration.
    #[arg(long, value_name = "CHAR", help = "Mask character used for matched positions.")]
    pub mask: Option<char>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes on stderr.")]
    pub diff: bool,
}

impl Commands {
    /// The engine query behind a one-shot command, if any.
    pub fn query(&self) -> Option<(Query, &QueryArgs)> {
        match self {
            Commands::Replace(cmd) => Some((Query::Replace, &cmd.query)),
            Commands::Filter(args) => Some((Query::Filter, args)),
            Commands::Validate(args) => Some((Query::Validate, args)),
            Commands::FindAll(args) => Some((Query::FindAll, args)),
            Commands::Serve(_) | Commands::Words => None,
        }
    }
}
