//! Shared helpers: storage directory resolution.

pub mod environment;

pub use environment::{INDEXES_DIR_ENV, indexes_dir};
