//! `[index]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [index]
//! content = "src/content/blog"          # Markdown posts (relative to site root)
//! output = "public/search-index.json"    # Index artifact (relative to site root)
//! extensions = ["md"]                    # Recognized content extensions
//! pretty = true                          # Two-space indented JSON
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Content source directory.
    pub content: PathBuf,

    /// Index artifact path.
    pub output: PathBuf,

    /// File extensions treated as posts, without the leading dot.
    pub extensions: Vec<String>,

    /// Pretty-print the JSON artifact.
    pub pretty: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            content: "src/content/blog".into(),
            output: "public/search-index.json".into(),
            extensions: vec!["md".into()],
            pretty: true,
        }
    }
}

impl IndexConfig {
    pub const FIELD_EXTENSIONS: FieldPath = FieldPath::new("index.extensions");
    pub const FIELD_OUTPUT: FieldPath = FieldPath::new("index.output");

    /// Check whether `path` carries one of the configured extensions.
    ///
    /// Comparison is case-insensitive (`POST.MD` counts as `md`).
    pub fn is_content_file(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Validate extensions and output path.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.push(
                Self::FIELD_EXTENSIONS,
                "is empty; list at least one, e.g. `[\"md\"]`",
            );
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.contains('.') {
                diag.push(
                    Self::FIELD_EXTENSIONS,
                    format!("`{ext}` is not an extension; write `md`, not `.md`"),
                );
            }
        }

        if self.output.file_name().is_none() {
            diag.push(Self::FIELD_OUTPUT, "must name a file");
        } else if self.output.is_dir() {
            diag.push(
                Self::FIELD_OUTPUT,
                format!("`{}` is a directory, not a file", self.output.display()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.index.content, PathBuf::from("src/content/blog"));
        assert_eq!(config.index.output, PathBuf::from("public/search-index.json"));
        assert_eq!(config.index.extensions, vec!["md"]);
        assert!(config.index.pretty);
    }

    #[test]
    fn test_custom_values() {
        let config = test_parse_config(
            r#"
[index]
content = "blog"
output = "dist/search.json"
extensions = ["md", "markdown"]
pretty = false
"#,
        );
        assert_eq!(config.index.content, PathBuf::from("blog"));
        assert_eq!(config.index.output, PathBuf::from("dist/search.json"));
        assert_eq!(config.index.extensions.len(), 2);
        assert!(!config.index.pretty);
    }

    #[test]
    fn test_is_content_file() {
        let config = IndexConfig::default();
        assert!(config.is_content_file(Path::new("blog/post.md")));
        assert!(config.is_content_file(Path::new("blog/POST.MD")));
        assert!(!config.is_content_file(Path::new("blog/post.markdown")));
        assert!(!config.is_content_file(Path::new("blog/notes.txt")));
        assert!(!config.is_content_file(Path::new("blog/md")));
    }

    #[test]
    fn test_validate_default_ok() {
        let mut diag = ConfigDiagnostics::new();
        IndexConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_bad_extensions() {
        let config = IndexConfig {
            extensions: vec![".md".into(), String::new()],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_empty_extensions() {
        let config = IndexConfig {
            extensions: vec![],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(!diag.is_empty());
    }

    #[test]
    fn test_validate_output_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = IndexConfig {
            output: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
