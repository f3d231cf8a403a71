use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Parser for the orb schema language.
///
/// orb reads line-oriented schema documents (directives, tables, columns,
/// aliases and constraints), reports every problem it finds with its line
/// number, and prints the parsed tree.
#[derive(Parser)]
#[command(
    name = "orb",
    version,
    about = "Parser for the orb schema language",
    after_help = "Use 'orb <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: ORB_CONFIG]
    #[arg(short = 'c', long = "config", global = true, env = "ORB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate schema documents
    Parse(ParseArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `orb parse`.
#[derive(Args)]
pub struct ParseArgs {
    /// Schema files or directories to parse; '-' or no path reads standard input
    pub paths: Vec<PathBuf>,

    /// Print the parsed tree in canonical form
    #[arg(long = "print")]
    pub print_tree: bool,
}

/// Arguments for `orb completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_parser = ["bash", "zsh", "fish", "powershell", "elvish"])]
    pub shell: String,
}
