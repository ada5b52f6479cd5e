//! `folio index`: build the search index artifact.

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::index;
use crate::log;
use crate::utils::path::display_relative;
use crate::utils::plural_count;

/// Generate the index and report how many posts it holds.
pub fn run_index(config: &SiteConfig) -> Result<()> {
    let index_config = &config.index;
    log!(
        "index";
        "scanning {}",
        display_relative(&index_config.content, config.get_root())
    );

    let index = index::generate(index_config).context("search index generation failed")?;
    if index.is_empty() {
        log!("index"; "no published posts found");
    }

    log!(
        "index";
        "generated search index with {} → {}",
        plural_count(index.len(), "post"),
        display_relative(&index_config.output, config.get_root())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_index_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        fs::create_dir_all(&config.index.content).unwrap();
        fs::write(config.index.content.join("hello.md"), "---\ntitle: \"Hello\"\n---\n").unwrap();

        run_index(&config).unwrap();
        assert!(config.index.output.is_file());
    }

    #[test]
    fn test_run_index_missing_content() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());

        let err = run_index(&config).unwrap_err();
        assert!(err.downcast_ref::<index::IndexError>().is_some());
        assert!(!config.index.output.exists());
    }
}
