//! Configuration error types.

use super::FieldPath;
use crate::utils::plural_count;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `folio.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in config")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(String),

    /// Displayed inline; no `source` so the list is not printed twice.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// Every problem found while validating `folio.toml`.
///
/// Sections push into one list so the user sees all of them in a single run.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics(Vec<(FieldPath, String)>);

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FieldPath, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok` when nothing was pushed.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Diagnostics(self))
        }
    }
}

/// One `[field] message` line per problem.
impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}:", plural_count(self.len(), "config value"))?;
        for (field, message) in &self.0 {
            write!(f, "\n  {field} {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
