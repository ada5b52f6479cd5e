//! `[check]` section configuration.
//!
//! Configuration for the `folio check` command.
//!
//! # Example
//!
//! ```toml
//! [check]
//! titles = true               # File name must match the slugified title
//! dates = true                # Dates must be real calendar dates
//! level = "error"             # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Compare each file name against its slugified title.
    pub titles: bool,

    /// Reject dates such as `2024-02-30`.
    pub dates: bool,

    /// How to treat problems: "error" or "warn".
    pub level: CheckLevel,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            titles: true,
            dates: true,
            level: CheckLevel::default(),
        }
    }
}

impl CheckConfig {
    /// Whether any check is enabled.
    pub const fn any_enabled(&self) -> bool {
        self.titles || self.dates
    }
}

/// Check failure level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Problems fail the command.
    #[default]
    Error,
    /// Problems are reported, the command succeeds.
    Warn,
}
