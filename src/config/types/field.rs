//! Config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Dotted path of a `folio.toml` key, e.g. `index.output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }
}

/// Rendered as `[index.output]`, colored when stderr supports it.
impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = format!("[{}]", self.0);
        write!(f, "{}", key.if_supports_color(Stream::Stderr, |k| k.cyan()))
    }
}
