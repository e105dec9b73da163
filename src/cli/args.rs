//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: Show the checkbox annotations in the given files
//! - `toggle`: Advance the annotation on a line to its next value
//! - `set`: Set the annotation on a line to a specific value
//! - `check`: Report values that are not among their candidates
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all file commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Language id to use for every file (overrides extension detection)
    #[arg(long, env = "CBTOGGLE_LANGUAGE")]
    pub language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Files to scan
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only show annotations whose variable name matches this query
    #[arg(long)]
    pub filter: Option<String>,

    /// Match the filter case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Treat the filter as a regular expression
    /// (implied when it starts with `^` or contains `[`)
    #[arg(long)]
    pub regex: bool,

    /// Print annotations as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ToggleCommand {
    /// File containing the annotation
    pub file: PathBuf,

    /// Line number (1-based)
    pub line: usize,

    /// Actually write the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// File containing the annotation
    pub file: PathBuf,

    /// Line number (1-based)
    pub line: usize,

    /// New value; must be one of the annotation's candidates
    pub value: String,

    /// Actually write the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List checkbox and carousel annotations
    List(ListCommand),
    /// Advance an annotation to its next value
    Toggle(ToggleCommand),
    /// Set an annotation to one of its values
    Set(SetCommand),
    /// Warn about values that are not among their candidates
    Check(CheckCommand),
    /// Initialize a new .cbtogglerc.json configuration file
    Init,
}
