//! Canonical post record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RawFrontMatter;

/// A post as it appears in the search index.
///
/// | Field     | Fallback                          |
/// |-----------|-----------------------------------|
/// | `title`   | file base name                    |
/// | `slug`    | always the file base name         |
/// | `summary` | `""` (from `description`)         |
/// | `tags`    | `[]`                              |
/// | `date`    | `""` (sorts after every date)     |
/// | `draft`   | `false`                           |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub date: String,
    pub draft: bool,
}

impl PostRecord {
    /// Build a record from a file's base name and its front matter.
    ///
    /// Never fails: missing fields resolve to their fallbacks.
    pub fn normalize(stem: &str, raw: Option<RawFrontMatter>) -> Self {
        let raw = raw.unwrap_or_default();

        let title = raw
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| stem.to_string());

        Self {
            title,
            slug: stem.to_string(),
            summary: raw.description.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            date: raw.date.unwrap_or_default(),
            draft: raw.draft.unwrap_or(false),
        }
    }

    /// Extract and normalize a post from its path and full text.
    pub fn from_source(path: &Path, content: &str) -> Self {
        Self::normalize(&file_stem(path), RawFrontMatter::extract(content))
    }
}

/// File name with the last extension removed (`hello.world.md` → `hello.world`).
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
