//! On-disk persistence for indexes.
//!
//! One pretty-printed JSON file per index, named `<index-name>.json`, inside
//! a configurable directory. Writes are atomic (temp file + rename) so a
//! crash mid-write never leaves a half-written file observable on the next
//! load.

pub mod store;

pub use store::{IndexStore, StoreError};
