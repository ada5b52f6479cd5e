//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio search index generator CLI
///
/// Running without a subcommand builds the search index.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Index artifact path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: folio.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the search index (default)
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Check post titles against file names, and post dates
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print tag and archive statistics
    #[command(visible_alias = "s")]
    Stats {
        #[command(flatten)]
        args: StatsArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Index {
            args: IndexArgs::default(),
        }
    }
}

/// Index command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Pretty-print the JSON artifact
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Report problems without failing
    #[arg(short, long)]
    pub warn_only: bool,
}

/// Stats command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct StatsArgs {
    /// Print JSON instead of log lines
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// The command to run, `index` when none was given.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}
