//! i18n-sync - keep a JSON translation-string file in sync with source code
//!
//! Scans source files for calls to translation marker functions (`_t`, `_td`,
//! `_tJsx` by default), compares the referenced keys with a flat JSON
//! reference file and reports keys to add or remove. Either set of changes
//! can be written back to the reference file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, logging, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, normalization, diffing and patching
//! - `error`: Error taxonomy of the synchronization pipeline

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
