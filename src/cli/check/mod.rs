//! Post consistency checks.
//!
//! - **titles**: `hello-world.md` must carry a title that slugifies to
//!   `hello-world`
//! - **dates**: a `YYYY-MM-DD` date must exist on the calendar
//!
//! Drafts are checked too: they become posts eventually.

mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Result, bail};
use rayon::prelude::*;
use regex::Regex;

use crate::config::{CheckConfig, CheckLevel, SiteConfig};
use crate::index::{IndexError, collect_post_files};
use crate::log;
use crate::post::frontmatter::split_block;
use crate::post::{RawFrontMatter, file_stem};
use crate::utils::date::PostDate;
use crate::utils::plural_count;
use crate::utils::slug::slugify_title;

use report::CheckReport;

/// Any `title:` line, quoted or bare.
static RE_TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*title:[ \t]*(.*?)[ \t]*\r?$").unwrap());

/// Problems found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    TitleMismatch {
        title: String,
        expected: String,
        actual: String,
    },
    InvalidDate {
        date: String,
        reason: String,
    },
}

/// Check every post in the content directory.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let check = &config.check;
    if !check.any_enabled() {
        log!("check"; "no checks enabled");
        return Ok(());
    }

    let files = collect_post_files(&config.index.content, &config.index)?;
    if files.is_empty() {
        log!("check"; "no posts found");
        return Ok(());
    }
    log!("check"; "checking {}", plural_count(files.len(), "post"));

    let findings = files
        .par_iter()
        .map(|path| {
            let content =
                fs::read_to_string(path).map_err(|e| IndexError::ReadFile(path.clone(), e))?;
            Ok((path.clone(), inspect(path, &content, check)))
        })
        .collect::<Result<Vec<(PathBuf, Vec<Finding>)>, IndexError>>()?;

    let report = build_report(findings);
    report.print();
    if !report.is_empty() {
        eprintln!();
    }
    log!("check"; "{}", report);

    if report.is_empty() || check.level == CheckLevel::Warn {
        return Ok(());
    }
    bail!("check failed: {}", plural_count(report.total(), "problem"))
}

/// Run the enabled checks against one file.
pub fn inspect(path: &Path, content: &str, check: &CheckConfig) -> Vec<Finding> {
    let Some(block) = split_block(content) else {
        return Vec::new();
    };
    let raw = RawFrontMatter::parse(block);
    let mut findings = Vec::new();

    if check.titles
        && let Some(title) = declared_title(block)
    {
        let actual = file_stem(path);
        let expected = slugify_title(&title);
        if expected != actual {
            findings.push(Finding::TitleMismatch {
                title,
                expected: with_extension_of(&expected, path),
                actual: file_name(path),
            });
        }
    }

    if check.dates
        && let Some(date) = &raw.date
        && PostDate::is_ymd_shaped(date)
        && let Err(err) = PostDate::parse_strict(date)
    {
        findings.push(Finding::InvalidDate {
            date: date.clone(),
            reason: err.to_string(),
        });
    }

    findings
}

/// The first `title:` value with surrounding quotes removed.
///
/// Unlike the index, bare titles count here: a file named after an unquoted
/// title still has to match it.
fn declared_title(block: &str) -> Option<String> {
    let caps = RE_TITLE_LINE.captures(block)?;
    let title = caps[1].trim_matches(|c| c == '"' || c == '\'').trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn build_report(findings: Vec<(PathBuf, Vec<Finding>)>) -> CheckReport {
    let mut report = CheckReport::default();
    for (path, list) in findings {
        let file = file_name(&path);
        for finding in list {
            match finding {
                Finding::TitleMismatch {
                    title,
                    expected,
                    actual,
                } => report.add_title(
                    file.clone(),
                    format!("\"{title}\""),
                    format!("expected {expected}, found {actual}"),
                ),
                Finding::InvalidDate { date, reason } => {
                    report.add_date(file.clone(), date, reason);
                }
            }
        }
    }
    report
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `hello-world` + `posts/Old.md` → `hello-world.md`
fn with_extension_of(stem: &str, path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
        None => stem.to_string(),
    }
}
