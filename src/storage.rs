use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::{SearchCriteria, SourcesFile};

/// Resolve the working root. Cache, criteria and config paths all hang off
/// this so runs are relocatable.
pub fn root() -> String {
    std::env::var("ROOT").unwrap_or_else(|_| ".".to_string())
}

pub fn criteria_path(root: &str) -> PathBuf {
    PathBuf::from(root).join("tracking/search_criteria.json")
}

pub fn seen_properties_path(root: &str) -> PathBuf {
    PathBuf::from(root).join("tracking/seen_properties.json")
}

pub fn seen_articles_path(root: &str) -> PathBuf {
    PathBuf::from(root).join("tracking/seen_articles.json")
}

/// Load saved search criteria if a previous run stored them.
pub fn load_criteria(root: &str) -> Result<Option<SearchCriteria>> {
    let path = criteria_path(root);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read criteria from {:?}", path))?;
    let criteria: SearchCriteria =
        serde_json::from_str(&content).with_context(|| "Failed to parse criteria JSON")?;

    Ok(Some(criteria))
}

pub fn save_criteria(root: &str, criteria: &SearchCriteria) -> Result<()> {
    let path = criteria_path(root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create tracking directory")?;
    }

    let json = serde_json::to_string_pretty(criteria)?;
    fs::write(&path, json).with_context(|| format!("Failed to write criteria to {:?}", path))?;
    Ok(())
}

/// Load a source list. The source configuration is required: a missing or
/// unparsable file is the one hard stop in the pipeline. An empty `sources`
/// array is fine and simply produces zero results.
pub fn load_sources(root: &str, file: &str) -> Result<SourcesFile> {
    let path = PathBuf::from(root).join("config").join(file);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read sources from {:?}", path))?;

    let sources: SourcesFile =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;

    Ok(sources)
}
