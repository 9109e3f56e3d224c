use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Kind of distributable artifact an index entry describes.
///
/// The set is closed: index files carrying any other `type` string fail to
/// parse instead of flowing through as free-form text. "No filter" is
/// expressed as `Option<ArtifactType>` at the command boundary, never as an
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Plugin,
    Rulesfile,
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactType::Plugin => write!(f, "plugin"),
            ArtifactType::Rulesfile => write!(f, "rulesfile"),
        }
    }
}

impl FromStr for ArtifactType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plugin" => Ok(ArtifactType::Plugin),
            "rulesfile" => Ok(ArtifactType::Rulesfile),
            other => {
                bail!(r#"unknown artifact type {other:?}, allowed values: "plugin", "rulesfile""#)
            }
        }
    }
}

/// Signature metadata attached to a published artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub digest: String,
}

/// One discoverable artifact inside an index.
///
/// Entries are immutable once constructed: a refresh replaces the whole entry
/// list of the owning index rather than mutating entries in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    pub registry: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

impl Entry {
    /// Full registry reference for this artifact, e.g. `r.io/falco/cloudtrail`.
    pub fn reference(&self) -> String {
        format!("{}/{}", self.registry, self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_type_roundtrip() {
        assert_eq!("plugin".parse::<ArtifactType>().unwrap(), ArtifactType::Plugin);
        assert_eq!("rulesfile".parse::<ArtifactType>().unwrap(), ArtifactType::Rulesfile);
        assert_eq!(ArtifactType::Plugin.to_string(), "plugin");
        assert_eq!(ArtifactType::Rulesfile.to_string(), "rulesfile");
    }

    #[test]
    fn test_artifact_type_rejects_unknown() {
        assert!("image".parse::<ArtifactType>().is_err());
        assert!("".parse::<ArtifactType>().is_err());
        assert!("Plugin".parse::<ArtifactType>().is_err());
    }

    #[test]
    fn test_entry_deserializes_type_field() {
        let json = r#"{
            "name": "cloudtrail",
            "type": "plugin",
            "registry": "r.io",
            "repository": "falco/cloudtrail"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.artifact_type, ArtifactType::Plugin);
        assert!(entry.description.is_none());
        assert!(entry.keywords.is_empty());
    }

    #[test]
    fn test_entry_rejects_unknown_type() {
        let json = r#"{"name":"x","type":"container","registry":"r.io","repository":"x/y"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_reference() {
        let entry = Entry {
            name: "cloudtrail".to_string(),
            artifact_type: ArtifactType::Plugin,
            registry: "r.io".to_string(),
            repository: "falco/cloudtrail".to_string(),
            description: None,
            keywords: Vec::new(),
            signature: None,
        };
        assert_eq!(entry.reference(), "r.io/falco/cloudtrail");
    }
}
