//! Search index generation.
//!
//! ```text
//! content dir ──► collect_post_files ──► load_posts (parallel) ──► PostIndex
//!                                                                    │
//!                        drop drafts, sort newest first ◄────────────┘
//!                                                                    │
//!                                 write_atomic(output) ◄── to_json ──┘
//! ```
//!
//! Each run is a pure function of the content directory: the same inputs
//! always produce a byte-identical artifact.

mod error;
mod scan;
mod write;

pub use error::IndexError;
pub use scan::{collect_post_files, load_posts};
pub use write::write_atomic;

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::IndexConfig;
use crate::post::PostRecord;

/// Published posts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostIndex {
    posts: Vec<PostRecord>,
}

impl PostIndex {
    /// Drop drafts and order the rest.
    pub fn from_records(records: impl IntoIterator<Item = PostRecord>) -> Self {
        let mut posts: Vec<_> = records.into_iter().filter(|p| !p.draft).collect();
        posts.sort_by(compare_recency);
        Self { posts }
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Serialize as a JSON array; `pretty` uses two-space indentation.
    pub fn to_json(&self, pretty: bool) -> Result<String, IndexError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Newest date first. `YYYY-MM-DD` compares correctly as a string, and the
/// empty date sorts after every real one. Ties break on slug ascending.
pub fn compare_recency(a: &PostRecord, b: &PostRecord) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
}

/// Scan, load and aggregate every post in the content directory.
pub fn build_index(config: &IndexConfig) -> Result<PostIndex, IndexError> {
    let files = collect_post_files(&config.content, config)?;
    let records = load_posts(&files)?;
    Ok(PostIndex::from_records(records))
}

/// Build the index and write it to the configured output.
///
/// Nothing is written unless the whole build succeeds.
pub fn generate(config: &IndexConfig) -> Result<PostIndex, IndexError> {
    let index = build_index(config)?;
    let json = index.to_json(config.pretty)?;
    write_atomic(&config.output, json.as_bytes())
        .map_err(|e| IndexError::Write(config.output.clone(), e))?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn record(slug: &str, date: &str, draft: bool) -> PostRecord {
        PostRecord {
            title: slug.to_string(),
            slug: slug.to_string(),
            summary: String::new(),
            tags: vec![],
            date: date.to_string(),
            draft,
        }
    }

    fn site(dir: &TempDir) -> IndexConfig {
        let content = dir.path().join("src/content/blog");
        fs::create_dir_all(&content).unwrap();
        IndexConfig {
            content,
            output: dir.path().join("public/search-index.json"),
            ..Default::default()
        }
    }

    fn post(config: &IndexConfig, name: &str, content: &str) {
        fs::write(config.content.join(name), content).unwrap();
    }

    fn slugs(index: &PostIndex) -> Vec<&str> {
        index.posts().iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_drafts_excluded() {
        let index = PostIndex::from_records([
            record("a", "2024-01-01", false),
            record("b", "2024-02-01", true),
        ]);
        assert_eq!(slugs(&index), ["a"]);
    }

    #[test]
    fn test_sorted_newest_first_undated_last() {
        let index = PostIndex::from_records([
            record("undated", "", false),
            record("old", "2023-06-01", false),
            record("new", "2024-06-01", false),
        ]);
        assert_eq!(slugs(&index), ["new", "old", "undated"]);
    }

    #[test]
    fn test_ties_break_on_slug() {
        let index = PostIndex::from_records([
            record("zeta", "2024-01-01", false),
            record("alpha", "2024-01-01", false),
            record("y-undated", "", false),
            record("b-undated", "", false),
        ]);
        assert_eq!(slugs(&index), ["alpha", "zeta", "b-undated", "y-undated"]);
    }

    #[test]
    fn test_every_adjacent_pair_ordered() {
        let dates = ["2021-03-04", "", "2024-12-31", "2021-03-04", "1999-01-01", ""];
        let records = dates
            .iter()
            .enumerate()
            .map(|(i, d)| record(&format!("p{i}"), d, false));
        let index = PostIndex::from_records(records);

        for pair in index.posts().windows(2) {
            assert_ne!(compare_recency(&pair[0], &pair[1]), Ordering::Greater);
            if pair[0].date.is_empty() {
                assert!(pair[1].date.is_empty());
            }
        }
    }

    #[test]
    fn test_to_json_shapes() {
        let index = PostIndex::from_records([record("a", "2024-01-01", false)]);

        let compact = index.to_json(false).unwrap();
        assert_eq!(
            compact,
            r#"[{"title":"a","slug":"a","summary":"","tags":[],"date":"2024-01-01","draft":false}]"#
        );

        let pretty = index.to_json(true).unwrap();
        assert!(pretty.starts_with("[\n  {\n    \"title\": \"a\","));
        assert!(!pretty.ends_with('\n'));
    }

    #[test]
    fn test_empty_index_is_empty_array() {
        let index = PostIndex::from_records(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.to_json(true).unwrap(), "[]");
    }

    #[test]
    fn test_generate_end_to_end() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        post(
            &config,
            "a.md",
            "---\ntitle: \"Alpha\"\ndate: 2024-01-01\ntags: [\"x\"]\n---\nbody",
        );
        post(&config, "b.md", "---\ntitle: \"Beta\"\ndate: 2024-02-01\ndraft: true\n---\n");
        post(&config, "c.md", "no front matter here");
        post(&config, "readme.txt", "---\ntitle: \"Ignored\"\n---\n");

        let index = generate(&config).unwrap();
        assert_eq!(index.len(), 2);

        let written = fs::read_to_string(&config.output).unwrap();
        let parsed: Vec<PostRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0].title, "Alpha");
        assert_eq!(parsed[0].slug, "a");
        assert_eq!(parsed[0].tags, ["x"]);
        assert_eq!(parsed[0].date, "2024-01-01");

        assert_eq!(parsed[1].title, "c");
        assert_eq!(parsed[1].slug, "c");
        assert_eq!(parsed[1].date, "");
        assert!(parsed[1].tags.is_empty());
    }

    #[test]
    fn test_draft_and_missing_front_matter() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        post(&config, "a.md", "---\ntitle: \"Alpha\"\ndate: 2024-01-01\ndraft: false\n---\n");
        post(&config, "b.md", "---\ndate: 2024-06-01\ndraft: true\n---\n");
        post(&config, "c.md", "plain text");

        let index = build_index(&config).unwrap();
        let got: Vec<_> = index
            .posts()
            .iter()
            .map(|p| (p.slug.as_str(), p.title.as_str(), p.date.as_str()))
            .collect();
        assert_eq!(got, [("a", "Alpha", "2024-01-01"), ("c", "c", "")]);
    }

    #[test]
    fn test_unreadable_post_keeps_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        post(&config, "a.md", "---\ntitle: \"Alpha\"\n---\n");
        fs::write(config.content.join("b.md"), [0xff, 0xfe]).unwrap();
        fs::create_dir_all(config.output.parent().unwrap()).unwrap();
        fs::write(&config.output, "previous").unwrap();

        let err = generate(&config).unwrap_err();
        assert!(matches!(err, IndexError::ReadFile(p, _) if p.ends_with("b.md")));
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "previous");
        assert_eq!(fs::read_dir(config.output.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        post(&config, "one.md", "---\ntitle: \"One\"\ndate: 2024-03-03\n---\n");
        post(&config, "two.md", "---\ntitle: \"Two\"\ndate: 2024-03-03\n---\n");
        post(&config, "three.md", "");

        generate(&config).unwrap();
        let first = fs::read(&config.output).unwrap();
        generate(&config).unwrap();
        let second = fs::read(&config.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_empty_dir_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);

        let index = generate(&config).unwrap();
        assert!(index.is_empty());
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "[]");
    }

    #[test]
    fn test_generate_missing_content_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = IndexConfig {
            content: dir.path().join("nope"),
            output: dir.path().join("public/search-index.json"),
            ..Default::default()
        };

        let err = generate(&config).unwrap_err();
        assert!(matches!(err, IndexError::MissingContentDir(_)));
        assert!(!config.output.exists());
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_generate_replaces_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::create_dir_all(config.output.parent().unwrap()).unwrap();
        fs::write(&config.output, "stale").unwrap();
        post(&config, "a.md", "");

        generate(&config).unwrap();
        let written = fs::read_to_string(&config.output).unwrap();
        assert!(written.contains("\"slug\": \"a\""));
    }

    #[test]
    fn test_generate_compact_output() {
        let dir = TempDir::new().unwrap();
        let config = IndexConfig {
            pretty: false,
            ..site(&dir)
        };
        post(&config, "a.md", "");

        generate(&config).unwrap();
        let written = fs::read_to_string(Path::new(&config.output)).unwrap();
        assert!(!written.contains('\n'));
    }
}
