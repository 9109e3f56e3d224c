//! artifact-scout - locate distributable artifacts across registry indexes
//!
//! This library implements a local cache of artifact "index" files (catalogs
//! of plugins and rules files published to remote registries) together with a
//! merged search engine over all cached indexes. It supports:
//!
//! - Loading and persisting per-index JSON files with atomic writes
//! - Adding, removing and refreshing indexes with rollback on failed writes
//! - Resolving artifact names to registry locations across all indexes
//! - Fuzzy keyword search with a tunable similarity threshold
//!
//! No network I/O happens here: fetching index content is an external write
//! path that cooperates through [`IndexCache::add`] and [`IndexCache::update`].
//!
//! # Example
//!
//! ```no_run
//! use artifact_scout::IndexCache;
//!
//! let cache = IndexCache::new("/home/alice/.config/artifact-scout/indexes")?;
//! let results = cache.merged().search_by_keywords(0.65, &["cloudtrail".to_string()]);
//! for result in results {
//!     println!("{} (score {:.2}, index {})", result.entry.name, result.score, result.index);
//! }
//! # Ok::<(), artifact_scout::CacheError>(())
//! ```

pub mod cache;
pub mod cli;
pub mod models;
pub mod search;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use cache::{CacheError, IndexCache, MergedIndex, ScoredEntry};
pub use models::{ArtifactType, Entry, Index, Signature};
pub use storage::{IndexStore, StoreError};
