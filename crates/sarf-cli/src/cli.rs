use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "sarf")]
#[command(about = "Arabic trilateral root and pattern lexicon")]
#[command(version)]
pub(crate) struct Cli {
    /// Config file (defaults to ./sarf.toml when present)
    #[arg(short, long, value_name = "PATH", env = "SARF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose logging; repeat for lexicon events
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Interactive shell over one seeded lexicon
    Shell,

    #[command(flatten)]
    Query(QueryCommand),
}

///
/// QueryCommand
/// Commands available both one-shot and inside the shell.
///

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub(crate) enum QueryCommand {
    /// Print the root tree, right subtree above
    Tree {
        #[arg(long)]
        json: bool,
    },

    /// List roots in ascending order with their derivatives
    Roots,

    /// List schemes in store order
    Schemes {
        #[arg(long)]
        json: bool,

        /// Show the hash buckets instead of a flat list
        #[arg(long)]
        buckets: bool,
    },

    /// Render ROOT through SCHEME
    Generate { root: String, scheme: String },

    /// Check whether WORD derives from ROOT under a stored scheme
    Validate { word: String, root: String },

    /// Find the known root WORD derives from
    Analyze { word: String },

    /// Lexicon summary and event counters
    Report {
        #[arg(long)]
        json: bool,
    },
}

///
/// ShellLine
/// One parsed shell input line.
///

#[derive(Debug, Parser)]
#[command(
    name = "shell",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

///
/// ShellCommand
///

#[derive(Debug, Eq, PartialEq, Subcommand)]
pub(crate) enum ShellCommand {
    #[command(flatten)]
    Query(QueryCommand),

    /// Register a root
    AddRoot { root: String },

    /// Add a scheme; quote names containing spaces
    AddScheme { name: String, pattern: String },

    /// Replace scheme OLD with NAME=PATTERN
    EditScheme {
        old: String,
        name: String,
        pattern: String,
    },

    /// Remove a scheme
    RemoveScheme { name: String },

    /// Show this help
    Help,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
