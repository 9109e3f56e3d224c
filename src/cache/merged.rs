//! Read-only union view over a set of indexes.

use std::collections::HashMap;

use crate::models::{Entry, Index};
use crate::search::keyword_score;

/// An entry returned by a keyword search, annotated with its relevance score
/// and the name of the index it came from. Plain data: mutating it never
/// touches cache state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub index: String,
    pub score: f64,
    pub entry: Entry,
}

/// The union of all entries across a set of indexes, annotated so each entry
/// can be traced back to its owning index.
///
/// A merged view is a snapshot: it is rebuilt from the cache on every read
/// path rather than kept up to date, so it can never be silently stale.
/// When the same artifact name appears in more than one index, lookups
/// resolve to the index that sorts first lexicographically by name.
#[derive(Debug, Default)]
pub struct MergedIndex {
    entries: Vec<Entry>,
    owners: HashMap<Entry, String>,
}

impl MergedIndex {
    /// Build the union view. Indexes are merged in ascending name order,
    /// which fixes the tie-break for cross-index name collisions.
    pub fn from_indexes<'a>(indexes: impl IntoIterator<Item = &'a Index>) -> Self {
        let mut sorted: Vec<&Index> = indexes.into_iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut entries = Vec::new();
        let mut owners = HashMap::new();
        for index in sorted {
            for entry in &index.entries {
                entries.push(entry.clone());
                // Identical entry values in two indexes keep the first owner.
                owners.entry(entry.clone()).or_insert_with(|| index.name.clone());
            }
        }

        Self { entries, owners }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-match lookup by artifact name. With cross-index collisions the
    /// entry from the lexicographically first index wins.
    pub fn entry_by_name(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Name of the index a previously returned entry belongs to.
    pub fn index_by_entry(&self, entry: &Entry) -> Option<&str> {
        self.owners.get(entry).map(String::as_str)
    }

    /// Rank entries by relevance to a set of free-text keywords.
    ///
    /// Only entries whose aggregate score reaches `min_score` are returned,
    /// ordered by descending score with ties broken by ascending entry name.
    /// An empty keyword set yields an empty result. `min_score` is expected
    /// to already be validated to `(0, 1]` by the caller.
    pub fn search_by_keywords(&self, min_score: f64, keywords: &[String]) -> Vec<ScoredEntry> {
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<ScoredEntry> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = keyword_score(entry, keywords);
                (score >= min_score).then(|| ScoredEntry {
                    index: self
                        .owners
                        .get(entry)
                        .cloned()
                        .unwrap_or_default(),
                    score,
                    entry: entry.clone(),
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.entry.name.cmp(&b.entry.name))
        });
        results
    }
}
