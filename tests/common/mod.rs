//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use artifact_scout::{ArtifactType, Entry, Index};
use tempfile::TempDir;

/// Builder for artifact entries with sensible defaults
pub struct EntryBuilder {
    name: String,
    artifact_type: ArtifactType,
    registry: String,
    repository: String,
    description: Option<String>,
    keywords: Vec<String>,
}

impl EntryBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            artifact_type: ArtifactType::Plugin,
            registry: "r.io".to_string(),
            repository: format!("falco/{name}"),
            description: None,
            keywords: Vec::new(),
        }
    }

    pub fn artifact_type(mut self, artifact_type: ArtifactType) -> Self {
        self.artifact_type = artifact_type;
        self
    }

    pub fn registry(mut self, registry: &str) -> Self {
        self.registry = registry.to_string();
        self
    }

    pub fn repository(mut self, repository: &str) -> Self {
        self.repository = repository.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn build(self) -> Entry {
        Entry {
            name: self.name,
            artifact_type: self.artifact_type,
            registry: self.registry,
            repository: self.repository,
            description: self.description,
            keywords: self.keywords,
            signature: None,
        }
    }
}

/// Builder for pre-populated index storage directories
pub struct IndexDirBuilder {
    temp_dir: TempDir,
}

impl IndexDirBuilder {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a well-formed index file
    pub fn with_index(self, name: &str, entries: Vec<Entry>) -> Self {
        let index = Index::new(name, None).with_entries(entries);
        let json = serde_json::to_string_pretty(&index).expect("Failed to serialize index");
        fs::write(self.temp_dir.path().join(format!("{name}.json")), json)
            .expect("Failed to write index file");
        self
    }

    /// Write arbitrary bytes under a file name, for corruption scenarios
    pub fn with_raw_file(self, filename: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(filename), content).expect("Failed to write raw file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for IndexDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two indexes mirroring the canonical search scenario: "core" holding
/// cloudtrail and "extra" holding cloudtrail-ext.
pub fn cloudtrail_dir() -> TempDir {
    IndexDirBuilder::new()
        .with_index(
            "core",
            vec![EntryBuilder::new("cloudtrail").registry("r.io").repository("falco/cloudtrail").build()],
        )
        .with_index(
            "extra",
            vec![
                EntryBuilder::new("cloudtrail-ext")
                    .registry("r2.io")
                    .repository("x/cloudtrail-ext")
                    .build(),
            ],
        )
        .build()
}
