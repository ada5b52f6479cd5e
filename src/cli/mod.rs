//! Command-line interface module.

mod args;
pub mod check;
pub mod index;
pub mod stats;

pub use args::{Cli, Commands, StatsArgs};
