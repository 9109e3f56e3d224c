//! File-per-index persistence with atomic writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Index;

const INDEX_FILE_EXT: &str = "json";

/// Errors surfaced by [`IndexStore`] operations on a single index file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no index file for {name:?}")]
    NotFound { name: String },
    #[error("index file for {name:?} is corrupt: {reason}")]
    Corrupt { name: String, reason: String },
    #[error("invalid index name {name:?}: must be a plain file name component")]
    InvalidName { name: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Durable storage for indexes: one JSON file per index inside a configured
/// directory, named after the index.
#[derive(Debug)]
pub struct IndexStore {
    dir: PathBuf,
}

impl IndexStore {
    /// The directory does not have to exist yet; it is created lazily on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Compute the file path for an index name, rejecting names that would
    /// escape the storage directory.
    fn file_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && !name.contains('\0');
        if !valid {
            return Err(StoreError::InvalidName { name: name.to_string() });
        }
        Ok(self.dir.join(format!("{name}.{INDEX_FILE_EXT}")))
    }

    /// Load a single index by name. Fails with [`StoreError::NotFound`] if no
    /// file exists and [`StoreError::Corrupt`] if the file cannot be parsed
    /// into a valid index.
    pub fn load(&self, name: &str) -> Result<Index, StoreError> {
        let path = self.file_path(name)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { name: name.to_string() });
            }
            Err(e) => return Err(e.into()),
        };

        let index: Index = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Corrupt { name: name.to_string(), reason: e.to_string() })?;

        index
            .validate()
            .map_err(|e| StoreError::Corrupt { name: name.to_string(), reason: e.to_string() })?;

        // The file key and the declared index name must agree, otherwise two
        // files could answer to the same name.
        if index.name != name {
            return Err(StoreError::Corrupt {
                name: name.to_string(),
                reason: format!("file declares index name {:?}", index.name),
            });
        }

        Ok(index)
    }

    /// Load every index file in the storage directory, sorted by name.
    ///
    /// A missing directory yields an empty list. Files that fail to parse are
    /// skipped with a warning so one bad file cannot prevent loading the rest.
    pub fn load_all(&self) -> Result<Vec<Index>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut indexes = Vec::new();
        for dir_entry in fs::read_dir(&self.dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(INDEX_FILE_EXT) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.load(name) {
                Ok(index) => indexes.push(index),
                Err(e) => {
                    eprintln!("Warning: skipping index file {}: {}", path.display(), e);
                }
            }
        }

        indexes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(indexes)
    }

    /// Write an index to its file, replacing any prior content.
    ///
    /// The write goes to a temporary file first and is then renamed into
    /// place, so a crash mid-write never leaves a half-written file under the
    /// index's name.
    pub fn save(&self, index: &Index) -> Result<(), StoreError> {
        let path = self.file_path(&index.name)?;
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(index).map_err(io::Error::other)?;
        let tmp_path = self.dir.join(format!("{}.{INDEX_FILE_EXT}.tmp", index.name));
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }

    /// Remove the file for an index. Deleting an absent index is not an
    /// error; the return value tells whether a file was actually removed.
    pub fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.file_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
