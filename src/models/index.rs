use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// A named catalog of artifact entries, typically mirroring one remote
/// source, cached locally. The name doubles as the on-disk file key, so it is
/// unique across all indexes held by one cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    /// Where the entry list was fetched from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the entry list was last refreshed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    pub entries: Vec<Entry>,
}

impl Index {
    /// Create an empty index with no freshness marker.
    pub fn new(name: impl Into<String>, source: Option<String>) -> Self {
        Self { name: name.into(), source, fetched_at: None, entries: Vec::new() }
    }

    /// Replace the entry list and stamp the freshness marker.
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self.fetched_at = Some(Utc::now());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the structural invariants a parsed index must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("index name is empty");
        }
        for entry in &self.entries {
            if entry.name.is_empty() {
                bail!("index {:?} contains an entry with an empty name", self.name);
            }
        }
        Ok(())
    }
}
