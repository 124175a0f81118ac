//! Seen-Item Cache
//!
//! Content-hash keyed store of items encountered on previous runs, persisted
//! as a flat JSON object. Entries are created on first encounter, updated on
//! every re-encounter, and never deleted; unbounded growth is accepted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::logger::Logger;
use crate::types::Article;

/// Stable fingerprint for an item: sha256 of "key|url" as lowercase hex.
/// Properties use their address as the key with an empty url; articles use
/// (title, url).
pub fn identity(key: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hasher.update(b"|");
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Metadata kept per seen item. Property entries carry price and counters;
/// article entries carry title/url/source. Extra fields in older cache files
/// are ignored on read, absent ones default to None.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeenEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub first_seen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_seen: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

pub struct SeenStore {
    path: PathBuf,
    entries: HashMap<String, SeenEntry>,
}

impl SeenStore {
    /// Load the cache from `path`. A missing file yields an empty cache;
    /// malformed JSON yields an empty cache and an error log entry. Neither
    /// aborts the run.
    pub fn load(path: &Path, logger: &Logger) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    logger.error(&format!(
                        "Invalid JSON in cache {:?}: {} (starting with empty cache)",
                        path, e
                    ));
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Rewrite the whole cache file. Called once at the end of a run.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cache directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write cache to {:?}", self.path))?;
        Ok(())
    }

    pub fn is_new(&self, id: &str) -> bool {
        !self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert-or-update a property entry. First encounter starts the counter
    /// at one; re-encounters bump it, refresh last_seen and overwrite the
    /// price with the latest listing price.
    pub fn record_property(&mut self, id: &str, price: f64) {
        let now = chrono::Local::now().to_rfc3339();
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.last_seen = Some(now);
                entry.times_seen = Some(entry.times_seen.unwrap_or(1) + 1);
                entry.price = Some(price);
            }
            None => {
                self.entries.insert(
                    id.to_string(),
                    SeenEntry {
                        first_seen: now.clone(),
                        last_seen: Some(now),
                        times_seen: Some(1),
                        price: Some(price),
                        ..SeenEntry::default()
                    },
                );
            }
        }
    }

    /// Insert-or-update an article entry. First encounter stores the article
    /// metadata; re-encounters only refresh last_seen.
    pub fn record_article(&mut self, id: &str, article: &Article) {
        let now = chrono::Local::now().to_rfc3339();
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.last_seen = Some(now);
            }
            None => {
                self.entries.insert(
                    id.to_string(),
                    SeenEntry {
                        title: Some(article.title.clone()),
                        url: Some(article.url.clone()),
                        source: Some(article.source.clone()),
                        first_seen: now,
                        ..SeenEntry::default()
                    },
                );
            }
        }
    }
}
