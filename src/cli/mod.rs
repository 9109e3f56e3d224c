//! Command-line glue: argument parsing, cache wiring, table rendering.
//!
//! Everything here is thin: commands validate their inputs, call into the
//! cache, and render the structured data the core hands back. No search or
//! persistence logic lives at this layer.

pub mod commands;
pub mod table;

pub use commands::run;
