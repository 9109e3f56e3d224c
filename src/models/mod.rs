//! Data model for cached artifact indexes.
//!
//! - [`Entry`] - one discoverable artifact (name, type, registry location)
//! - [`Index`] - a named collection of entries plus provenance metadata
//! - [`ArtifactType`] - closed enumeration of distributable artifact kinds
//!
//! These types use serde for the JSON index file format; required fields
//! (`name`, `entries`, per-entry `type`) make corrupt files detectable at
//! parse time.

pub mod entry;
pub mod index;

pub use entry::{ArtifactType, Entry, Signature};
pub use index::Index;
