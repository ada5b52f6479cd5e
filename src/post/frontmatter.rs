//! Front matter extraction from markdown posts.
//!
//! Only a fixed set of fields is recognized, each by its own pattern over the
//! isolated `---` block. This is not a YAML parser: anything outside these
//! shapes is ignored and left to the fallbacks in [`PostRecord`].
//!
//! ```text
//! ---
//! title: "Hello"
//! description: 'A short summary'
//! date: 2024-06-01
//! tags: [rust, "web", 'ci']
//! draft: false
//! ---
//! ```
//!
//! [`PostRecord`]: super::PostRecord

use std::sync::LazyLock;

use regex::Regex;

/// Opening marker at the very start, closing marker on its own line.
static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n(?:([\s\S]*?)\r?\n)??---[ \t]*(?:\r?\n|\z)").unwrap()
});

static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| quoted_field("title"));

static RE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| quoted_field("description"));

static RE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*date:[ \t]*([0-9]{4}-[0-9]{2}-[0-9]{2})").unwrap()
});

static RE_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*tags:[ \t]*\[([^\]\r\n]*)\]").unwrap());

static RE_DRAFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*draft:[ \t]*(true|false)\b").unwrap());

/// `key: "value"` or `key: 'value'`, quotes must pair.
fn quoted_field(key: &str) -> Regex {
    Regex::new(&format!(
        r#"(?m)^[ \t]*{key}:[ \t]*(?:"([^"\r\n]+)"|'([^'\r\n]+)')"#
    ))
    .unwrap()
}

/// Fields found in a front matter block.
///
/// `None` means the key was absent (or did not have a recognized shape),
/// which is distinct from a present but empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub draft: Option<bool>,
}

impl RawFrontMatter {
    /// Extract the front matter block from `content` and parse its fields.
    ///
    /// Returns `None` when the document does not start with a `---` block.
    pub fn extract(content: &str) -> Option<Self> {
        split_block(content).map(Self::parse)
    }

    /// Parse the known fields from an isolated block.
    ///
    /// Every field is matched independently; the first occurrence wins.
    pub fn parse(block: &str) -> Self {
        Self {
            title: quoted_value(&RE_TITLE, block),
            description: quoted_value(&RE_DESCRIPTION, block),
            date: RE_DATE
                .captures(block)
                .map(|caps| caps[1].to_string()),
            tags: RE_TAGS.captures(block).map(|caps| parse_tags(&caps[1])),
            draft: RE_DRAFT.captures(block).map(|caps| &caps[1] == "true"),
        }
    }
}

/// Return the text between the opening and closing `---` markers.
pub fn split_block(content: &str) -> Option<&str> {
    let caps = RE_BLOCK.captures(content)?;
    Some(caps.get(1).map_or("", |m| m.as_str()))
}

fn quoted_value(re: &Regex, block: &str) -> Option<String> {
    let caps = re.captures(block)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Split a single-line bracketed list body (`a, "b" , 'c'`).
///
/// Elements are trimmed, stripped of every quote character and dropped when
/// empty. Repeated tags keep their first position.
fn parse_tags(list: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in list.split(',') {
        let tag: String = item.trim().chars().filter(|c| !matches!(c, '"' | '\'')).collect();
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
