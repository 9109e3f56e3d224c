//! In-memory cache of loaded indexes, backed by an [`IndexStore`].
//!
//! A cache object loads every index file found in its storage directory at
//! construction time, or starts blank if the directory is absent. Mutations
//! (`add`, `remove`, `update`) persist immediately; when persistence fails
//! the in-memory mapping is rolled back so it always matches the last
//! successful on-disk state.
//!
//! The cache assumes a single writer within one process invocation. It is
//! constructed once and passed down to command handlers explicitly, never
//! reached through process-global state, so tests can point isolated
//! instances at temporary directories.

pub mod merged;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Entry, Index};
use crate::storage::{IndexStore, StoreError};

pub use merged::{MergedIndex, ScoredEntry};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("index {name:?} is not in the cache")]
    NotFound { name: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Process-wide registry of loaded indexes.
///
/// Indexes are keyed by name in a `BTreeMap`, which gives deterministic
/// lexicographic iteration; that order is also the tie-break the merged view
/// uses when the same artifact name occurs in several indexes.
#[derive(Debug)]
pub struct IndexCache {
    store: IndexStore,
    indexes: BTreeMap<String, Index>,
}

impl IndexCache {
    /// Load every persisted index from `dir`. A missing directory is not an
    /// error; the cache starts empty and the directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let store = IndexStore::new(dir);
        let indexes = store
            .load_all()?
            .into_iter()
            .map(|index| (index.name.clone(), index))
            .collect();
        Ok(Self { store, indexes })
    }

    pub fn dir(&self) -> &Path {
        self.store.dir()
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Index> {
        self.indexes.get(name)
    }

    /// Iterate loaded indexes in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &Index> {
        self.indexes.values()
    }

    /// Insert or replace an index under its name and persist it.
    ///
    /// Replacement is last-write-wins: adding an index whose name is already
    /// loaded silently supersedes the previous one, in memory and on disk.
    /// If the write fails the previous in-memory state is restored.
    pub fn add(&mut self, index: Index) -> Result<(), CacheError> {
        let name = index.name.clone();
        let previous = self.indexes.insert(name.clone(), index);

        if let Err(e) = self.store.save(&self.indexes[&name]) {
            match previous {
                Some(p) => self.indexes.insert(name, p),
                None => self.indexes.remove(&name),
            };
            return Err(e.into());
        }
        Ok(())
    }

    /// Remove an index from the cache and delete its file.
    ///
    /// Removing a name that is not loaded is not fatal: the cache is already
    /// in the desired end state, and the return value reports whether
    /// anything was actually removed. A failed file delete restores the
    /// in-memory entry before surfacing the error.
    pub fn remove(&mut self, name: &str) -> Result<bool, CacheError> {
        let previous = self.indexes.remove(name);

        match self.store.delete(name) {
            Ok(deleted) => Ok(previous.is_some() || deleted),
            Err(e) => {
                if let Some(p) = previous {
                    self.indexes.insert(name.to_string(), p);
                }
                Err(e.into())
            }
        }
    }

    /// Replace the entry list of a loaded index, stamping a fresh timestamp.
    ///
    /// This is the write path a refresh performed outside the cache (the
    /// remote fetch) cooperates through. Fails with [`CacheError::NotFound`]
    /// if `name` is not loaded; rolls back on a failed write.
    pub fn update(&mut self, name: &str, entries: Vec<Entry>) -> Result<(), CacheError> {
        let Some(current) = self.indexes.get(name) else {
            return Err(CacheError::NotFound { name: name.to_string() });
        };

        let updated = current.clone().with_entries(entries);
        let previous = self.indexes.insert(name.to_string(), updated);

        if let Err(e) = self.store.save(&self.indexes[name]) {
            if let Some(p) = previous {
                self.indexes.insert(name.to_string(), p);
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Build the union view over all loaded indexes. Recomputed per call,
    /// O(total entry count), so it always reflects the current cache state.
    pub fn merged(&self) -> MergedIndex {
        MergedIndex::from_indexes(self.indexes.values())
    }

    /// Exact-match lookup across all indexes. Returns a detached copy of the
    /// entry and the name of its owning index.
    pub fn entry_by_name(&self, name: &str) -> Option<(Entry, String)> {
        let merged = self.merged();
        let entry = merged.entry_by_name(name)?.clone();
        let index = merged.index_by_entry(&entry).unwrap_or_default().to_string();
        Some((entry, index))
    }
}
