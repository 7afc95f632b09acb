//! Core synchronization engine.
//!
//! - `extract`: translation keys referenced in source text
//! - `normalize`: plural-suffix stripping of reference keys
//! - `diff`: added/removed key sets
//! - `reference`: the on-disk JSON mapping (load, patch, persist)
//! - `file_scanner`: expands source arguments into files
//! - `sync`: the pipeline tying the steps together

pub mod diff;
pub mod extract;
pub mod file_scanner;
pub mod normalize;
pub mod reference;
pub mod sync;

pub use diff::KeyDiff;
pub use extract::KeyExtractor;
pub use reference::ReferenceMap;
pub use sync::{SyncOptions, SyncReport, Synchronizer};
