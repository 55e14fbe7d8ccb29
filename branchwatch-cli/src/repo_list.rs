//! Repository list file
//!
//! One repository name per line; surrounding whitespace is trimmed and blank
//! lines are skipped.

use std::path::Path;

use anyhow::{Context, Result};

/// Read the repository names listed in `path`
pub fn read_repos(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read repository list {}", path.display()))?;

    Ok(parse_repos(&content))
}

pub fn parse_repos(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
