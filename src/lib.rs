//! Locsync - one-shot maintenance for per-locale JSON translation files
//!
//! Locsync is a small CLI for two supervised migrations over a set of
//! locale JSON files: propagating missing translation keys from the
//! reference (English) locale into the others, and consolidating a
//! translation group that drifted to two structural positions.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, dispatch)
//! - `commands`: Command runners (`propagate`, `consolidate`)
//! - `config`: Configuration file loading and parsing
//! - `consolidate`: Structural consolidation of the byVolume group
//! - `discover`: Locale file discovery
//! - `document`: Locale document load/save with stable formatting
//! - `merge`: Key propagation merge (additive, no overwrite)
//! - `report`: Progress and summary output

pub mod cli;
pub mod commands;
pub mod config;
pub mod consolidate;
pub mod discover;
pub mod document;
pub mod merge;
pub mod report;
