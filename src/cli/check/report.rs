//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::{OwoColorize, Stream, Style};

use crate::utils::plural_s;

/// A single check finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIssue {
    /// The offending value (title or date).
    pub target: String,
    /// What is wrong with it.
    pub reason: String,
}

/// Check report, grouped by file name
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Title/file name mismatches.
    pub titles: BTreeMap<String, Vec<CheckIssue>>,
    /// Dates that are not real calendar dates.
    pub dates: BTreeMap<String, Vec<CheckIssue>>,
}

impl CheckReport {
    pub fn add_title(&mut self, file: String, title: String, reason: String) {
        self.titles.entry(file).or_default().push(CheckIssue {
            target: title,
            reason,
        });
    }

    pub fn add_date(&mut self, file: String, date: String, reason: String) {
        self.dates.entry(file).or_default().push(CheckIssue {
            target: date,
            reason,
        });
    }

    pub fn title_count(&self) -> usize {
        self.titles.values().map(Vec::len).sum()
    }

    pub fn date_count(&self) -> usize {
        self.dates.values().map(Vec::len).sum()
    }

    pub fn total(&self) -> usize {
        self.title_count() + self.date_count()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Print the full report to stderr (titles -> dates).
    pub fn print(&self) {
        print_section("titles", &self.titles);
        print_section("dates", &self.dates);
    }
}

fn print_section(name: &str, issues: &BTreeMap<String, Vec<CheckIssue>>) {
    if issues.is_empty() {
        return;
    }
    eprintln!();

    let err = Stream::Stderr;
    let file_count = issues.len();
    let issue_count: usize = issues.values().map(Vec::len).sum();
    let counts = format!(
        "({file_count} file{}, {issue_count} problem{})",
        plural_s(file_count),
        plural_s(issue_count)
    );

    eprintln!(
        "{} {}",
        name.if_supports_color(err, |t| t.style(Style::new().red().bold())),
        counts.if_supports_color(err, |t| t.dimmed())
    );

    for (file, list) in issues {
        eprintln!(
            "{}{}{}",
            "[".if_supports_color(err, |t| t.dimmed()),
            file.if_supports_color(err, |t| t.cyan()),
            "]".if_supports_color(err, |t| t.dimmed())
        );
        for issue in list {
            eprintln!(
                "{} {} {}",
                "→".if_supports_color(err, |t| t.red()),
                issue.target,
                issue.reason.if_supports_color(err, |t| t.dimmed())
            );
        }
    }
}

/// Summary line, written through `log!` to stdout.
impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = Stream::Stdout;
        let total = self.total();
        if total == 0 {
            return write!(f, "{}", "all checks passed".if_supports_color(out, |t| t.green()));
        }
        let noun = format!("problem{}", plural_s(total));
        write!(
            f,
            "{} {} {}",
            "found".if_supports_color(out, |t| t.dimmed()),
            total.if_supports_color(out, |t| t.style(Style::new().red().bold())),
            noun.if_supports_color(out, |t| t.dimmed())
        )
    }
}
