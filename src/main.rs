//! Folio - A build-time search index generator for markdown blogs.

mod cli;
mod config;
mod index;
mod logger;
mod post;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match cli.effective_command() {
        Commands::Index { .. } => cli::index::run_index(&config),
        Commands::Check { .. } => cli::check::run_check(&config),
        Commands::Stats { args } => cli::stats::run_stats(&args, &config),
    }
}
