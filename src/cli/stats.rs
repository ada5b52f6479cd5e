//! `folio stats`: tag counts and archive years over published posts.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue, json};

use crate::cli::StatsArgs;
use crate::config::SiteConfig;
use crate::index::{self, PostIndex};
use crate::log;
use crate::utils::date::PostDate;
use crate::utils::plural_count;

/// Aggregated counts for a set of published posts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PostStats {
    pub posts: usize,
    /// Tag → number of posts carrying it, alphabetical.
    pub tags: BTreeMap<String, usize>,
    /// Year → number of posts, newest year first.
    pub years: Vec<(u16, usize)>,
    /// Posts without a valid calendar date.
    pub undated: usize,
}

impl PostStats {
    pub fn collect(index: &PostIndex) -> Self {
        let mut tags = BTreeMap::new();
        let mut years: BTreeMap<u16, usize> = BTreeMap::new();
        let mut undated = 0;

        for post in index.posts() {
            for tag in &post.tags {
                *tags.entry(tag.clone()).or_insert(0) += 1;
            }
            match PostDate::parse(&post.date) {
                Some(date) => *years.entry(date.year).or_insert(0) += 1,
                None => undated += 1,
            }
        }

        Self {
            posts: index.len(),
            tags,
            years: years.into_iter().rev().collect(),
            undated,
        }
    }

    /// `{"posts", "tags", "years", "undated"}`, keys in display order.
    pub fn to_json(&self) -> JsonValue {
        let years: Map<String, JsonValue> = self
            .years
            .iter()
            .map(|(year, count)| (year.to_string(), json!(count)))
            .collect();

        json!({
            "posts": self.posts,
            "tags": self.tags,
            "years": years,
            "undated": self.undated,
        })
    }

    fn log(&self) {
        log!(
            "stats";
            "{}, {}, {} undated",
            plural_count(self.posts, "post"),
            plural_count(self.tags.len(), "tag"),
            self.undated
        );

        if !self.tags.is_empty() {
            let tags = self
                .tags
                .iter()
                .map(|(tag, count)| format!("{tag} ({count})"))
                .collect::<Vec<_>>()
                .join(", ");
            log!("stats"; "tags: {}", tags);
        }

        for (year, count) in &self.years {
            log!("stats"; "{}: {}", year, plural_count(*count, "post"));
        }
    }
}

pub fn run_stats(args: &StatsArgs, config: &SiteConfig) -> Result<()> {
    let index = index::build_index(&config.index).context("failed to collect posts")?;
    let stats = PostStats::collect(&index);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats.to_json())?);
    } else {
        stats.log();
    }
    Ok(())
}
