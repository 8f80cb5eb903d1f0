// src/utils/roster.rs - Reading candidate rosters from disk
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// One name per line. Surrounding whitespace is trimmed, blank lines and
/// lines starting with `#` are skipped. Duplicates are kept, roster order
/// matters for tie-breaking.
pub fn parse_roster(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let roster = parse_roster(&contents);
    debug!("Loaded {} roster entries from {}", roster.len(), path.display());
    Ok(roster)
}
